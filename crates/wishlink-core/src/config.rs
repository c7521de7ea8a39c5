//! Backend connection settings
//!
//! Supplied by the hosting environment. The browser build bakes them in at
//! compile time (`option_env!`); anything else can pass its own lookup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_API_KEY: &str = "WISHLINK_FIREBASE_API_KEY";
pub const ENV_AUTH_DOMAIN: &str = "WISHLINK_FIREBASE_AUTH_DOMAIN";
pub const ENV_PROJECT_ID: &str = "WISHLINK_FIREBASE_PROJECT_ID";
pub const ENV_STORAGE_BUCKET: &str = "WISHLINK_FIREBASE_STORAGE_BUCKET";
pub const ENV_MESSAGING_SENDER_ID: &str = "WISHLINK_FIREBASE_MESSAGING_SENDER_ID";
pub const ENV_APP_ID: &str = "WISHLINK_FIREBASE_APP_ID";
pub const ENV_MEASUREMENT_ID: &str = "WISHLINK_FIREBASE_MEASUREMENT_ID";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),
}

/// Firebase web app settings, serialized the way the SDK expects them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    pub app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl FirebaseConfig {
    /// Build from a key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let api_key = required(ENV_API_KEY)?;
        let project_id = required(ENV_PROJECT_ID)?;
        let app_id = required(ENV_APP_ID)?;
        let auth_domain =
            get(ENV_AUTH_DOMAIN).unwrap_or_else(|| format!("{}.firebaseapp.com", project_id));

        Ok(Self {
            api_key,
            auth_domain,
            project_id,
            storage_bucket: get(ENV_STORAGE_BUCKET),
            messaging_sender_id: get(ENV_MESSAGING_SENDER_ID),
            app_id,
            measurement_id: get(ENV_MEASUREMENT_ID),
        })
    }

    /// Settings baked in from the build environment
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| build_env(key).map(str::to_string))
    }
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        ENV_API_KEY => option_env!("WISHLINK_FIREBASE_API_KEY"),
        ENV_AUTH_DOMAIN => option_env!("WISHLINK_FIREBASE_AUTH_DOMAIN"),
        ENV_PROJECT_ID => option_env!("WISHLINK_FIREBASE_PROJECT_ID"),
        ENV_STORAGE_BUCKET => option_env!("WISHLINK_FIREBASE_STORAGE_BUCKET"),
        ENV_MESSAGING_SENDER_ID => option_env!("WISHLINK_FIREBASE_MESSAGING_SENDER_ID"),
        ENV_APP_ID => option_env!("WISHLINK_FIREBASE_APP_ID"),
        ENV_MEASUREMENT_ID => option_env!("WISHLINK_FIREBASE_MEASUREMENT_ID"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config = FirebaseConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "key"),
            (ENV_PROJECT_ID, "wishlink-dev"),
            (ENV_APP_ID, "1:2:web:3"),
        ]))
        .unwrap();

        assert_eq!(config.auth_domain, "wishlink-dev.firebaseapp.com");
        assert_eq!(config.storage_bucket, None);
        assert_eq!(config.measurement_id, None);
    }

    #[test]
    fn test_missing_required_key() {
        let err = FirebaseConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "key"),
            (ENV_APP_ID, "1:2:web:3"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_PROJECT_ID));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = FirebaseConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "  "),
            (ENV_PROJECT_ID, "p"),
            (ENV_APP_ID, "a"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(ENV_API_KEY));
    }

    #[test]
    fn test_explicit_values_win() {
        let config = FirebaseConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "key"),
            (ENV_PROJECT_ID, "p"),
            (ENV_APP_ID, "a"),
            (ENV_AUTH_DOMAIN, "login.example.com"),
            (ENV_MEASUREMENT_ID, "G-123"),
        ]))
        .unwrap();
        assert_eq!(config.auth_domain, "login.example.com");
        assert_eq!(config.measurement_id.as_deref(), Some("G-123"));
    }
}
