//! List Entity
//!
//! A named, shareable collection of tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ListId;

/// Title used when the user leaves the title blank
pub const DEFAULT_LIST_TITLE: &str = "やりたいことリスト";

/// Title shown for a stored list document without a title field
pub const UNTITLED_LIST_TITLE: &str = "共有リスト";

/// A shared list as mirrored from the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    /// Backend-assigned, never changes
    pub id: ListId,
    pub title: String,
    /// Server timestamp; absent while the creating write is pending
    pub created_at: Option<DateTime<Utc>>,
}

impl TodoList {
    pub fn new(id: ListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: None,
        }
    }
}

/// Fields of a list about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub title: String,
}

impl NewList {
    pub fn from_input(input: &str) -> Self {
        Self {
            title: effective_title(input),
        }
    }
}

/// Title to persist for user input: blank input falls back to the default.
pub fn effective_title(input: &str) -> String {
    if input.trim().is_empty() {
        DEFAULT_LIST_TITLE.to_string()
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_falls_back_to_default() {
        assert_eq!(effective_title(""), DEFAULT_LIST_TITLE);
        assert_eq!(effective_title("   "), DEFAULT_LIST_TITLE);
        assert_eq!(NewList::from_input("").title, DEFAULT_LIST_TITLE);
    }

    #[test]
    fn test_title_kept_as_typed() {
        assert_eq!(effective_title("Trip Plans"), "Trip Plans");
        assert_eq!(effective_title(" 旅行 "), " 旅行 ");
    }
}
