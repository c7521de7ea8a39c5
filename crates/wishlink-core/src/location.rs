//! The `?list=<id>` query parameter is the app's only addressable surface.

use thiserror::Error;
use url::Url;

use crate::domain::ListId;

pub const LIST_QUERY_PARAM: &str = "list";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("invalid location {href:?}: {source}")]
    Invalid {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

fn parse(href: &str) -> Result<Url, LocationError> {
    Url::parse(href).map_err(|source| LocationError::Invalid {
        href: href.to_string(),
        source,
    })
}

/// Selected list id, if the location carries a non-empty `list` parameter
pub fn list_id_from_location(href: &str) -> Result<Option<ListId>, LocationError> {
    let url = parse(href)?;
    let id = url
        .query_pairs()
        .find(|(key, _)| key == LIST_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .map(ListId::new);
    Ok(id)
}

/// `href` with its `list` parameter set to `id`; other parameters and the
/// fragment are kept.
pub fn location_with_list(href: &str, id: &ListId) -> Result<String, LocationError> {
    let mut url = parse(href)?;
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != LIST_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(LIST_QUERY_PARAM, id.as_str());
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parameter() {
        assert_eq!(list_id_from_location("https://wishlink.example/").unwrap(), None);
        assert_eq!(list_id_from_location("https://wishlink.example/?other=1").unwrap(), None);
    }

    #[test]
    fn test_empty_parameter_means_no_list() {
        assert_eq!(list_id_from_location("https://wishlink.example/?list=").unwrap(), None);
    }

    #[test]
    fn test_reads_parameter() {
        let id = list_id_from_location("https://wishlink.example/?a=1&list=AbC123#top").unwrap();
        assert_eq!(id, Some(ListId::new("AbC123")));
    }

    #[test]
    fn test_percent_encoded_value() {
        let id = list_id_from_location("https://wishlink.example/?list=a%2Fb").unwrap();
        assert_eq!(id, Some(ListId::new("a/b")));
    }

    #[test]
    fn test_sets_parameter() {
        let href = location_with_list("https://wishlink.example/", &ListId::new("xyz")).unwrap();
        assert_eq!(href, "https://wishlink.example/?list=xyz");
    }

    #[test]
    fn test_replaces_parameter_and_keeps_the_rest() {
        let href = location_with_list(
            "https://wishlink.example/app?utm=mail&list=old#tasks",
            &ListId::new("new"),
        )
        .unwrap();
        assert_eq!(href, "https://wishlink.example/app?utm=mail&list=new#tasks");
        assert_eq!(list_id_from_location(&href).unwrap(), Some(ListId::new("new")));
    }

    #[test]
    fn test_invalid_location() {
        let err = list_id_from_location("not a url").unwrap_err();
        assert!(matches!(err, LocationError::Invalid { .. }));
    }
}
