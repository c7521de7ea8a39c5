//! Task Entity
//!
//! A single to-do item scoped to one list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ListId, TaskId};

/// A task as mirrored from the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// The list this task shows up in (query filter, not a constraint)
    pub list_id: ListId,
    pub text: String,
    pub completed: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields of a task about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub list_id: ListId,
    pub text: String,
}

impl NewTask {
    /// Build from form input. Returns `None` when the trimmed text is empty.
    pub fn from_input(list_id: &ListId, input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            list_id: list_id.clone(),
            text: text.to_string(),
        })
    }
}
