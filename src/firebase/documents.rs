//! Firestore Document Shapes
//!
//! Field layout of the `lists` and `tasks` collections and the conversion
//! between bridge payloads and domain values. The bridge flattens
//! `createdAt` timestamps to `createdAtMillis`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wishlink_core::{ListId, StoreError, Task, TaskId, TodoList, UNTITLED_LIST_TITLE};

pub const LISTS: &str = "lists";
pub const TASKS: &str = "tasks";
pub const FIELD_LIST_ID: &str = "listId";
pub const FIELD_CREATED_AT: &str = "createdAt";

// ========================
// Writes
// ========================

#[derive(Serialize)]
pub struct ListFields<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskFields<'a> {
    pub list_id: &'a str,
    pub text: &'a str,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct CompletedField {
    pub completed: bool,
}

// ========================
// Snapshots
// ========================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot<T> {
    pub id: String,
    #[serde(default)]
    pub exists: bool,
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocument {
    pub title: Option<String>,
    pub created_at_millis: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocument {
    pub list_id: String,
    /// Absent or `null` renders as an empty row
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    pub created_at_millis: Option<f64>,
}

fn timestamp(millis: Option<f64>) -> Option<DateTime<Utc>> {
    millis.and_then(|ms| DateTime::from_timestamp_millis(ms as i64))
}

/// `None` when the list document does not exist
pub fn list_from_snapshot(snapshot: DocumentSnapshot<ListDocument>) -> Option<TodoList> {
    if !snapshot.exists {
        return None;
    }
    let data = snapshot.data?;
    Some(TodoList {
        id: ListId::new(snapshot.id),
        title: data
            .title
            .unwrap_or_else(|| UNTITLED_LIST_TITLE.to_string()),
        created_at: timestamp(data.created_at_millis),
    })
}

pub fn tasks_from_snapshots(
    snapshots: Vec<DocumentSnapshot<TaskDocument>>,
) -> Result<Vec<Task>, StoreError> {
    snapshots
        .into_iter()
        .map(|snapshot| {
            let data = snapshot
                .data
                .ok_or_else(|| StoreError::Decode(format!("tasks/{} has no data", snapshot.id)))?;
            Ok(Task {
                id: TaskId::new(snapshot.id),
                list_id: ListId::new(data.list_id),
                text: data.text.unwrap_or_default(),
                completed: data.completed.unwrap_or(false),
                created_at: timestamp(data.created_at_millis),
            })
        })
        .collect()
}

/// Map a Firestore/Auth error code (`permission-denied`, `unavailable`...)
pub fn classify_error(code: Option<&str>, message: String) -> StoreError {
    match code {
        Some("unavailable") | Some("deadline-exceeded") | Some("auth/network-request-failed") => {
            StoreError::Unavailable(message)
        }
        Some("not-found") => StoreError::NotFound(message),
        Some("data-loss") | Some("invalid-argument") => StoreError::Decode(message),
        _ => StoreError::Rejected(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_snapshot() {
        let snapshot: DocumentSnapshot<ListDocument> = serde_json::from_value(json!({
            "id": "L1",
            "exists": true,
            "data": { "title": "Trip", "createdAtMillis": 1_700_000_000_000.0 }
        }))
        .unwrap();

        let list = list_from_snapshot(snapshot).unwrap();
        assert_eq!(list.id, ListId::new("L1"));
        assert_eq!(list.title, "Trip");
        assert_eq!(list.created_at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_list_without_title_field() {
        let snapshot: DocumentSnapshot<ListDocument> = serde_json::from_value(json!({
            "id": "L1",
            "exists": true,
            "data": { "createdAtMillis": null }
        }))
        .unwrap();

        let list = list_from_snapshot(snapshot).unwrap();
        assert_eq!(list.title, UNTITLED_LIST_TITLE);
        assert!(list.created_at.is_none());
    }

    #[test]
    fn test_missing_list() {
        let snapshot: DocumentSnapshot<ListDocument> =
            serde_json::from_value(json!({ "id": "L1", "exists": false, "data": null })).unwrap();
        assert!(list_from_snapshot(snapshot).is_none());
    }

    #[test]
    fn test_task_snapshots() {
        let snapshots: Vec<DocumentSnapshot<TaskDocument>> = serde_json::from_value(json!([
            { "id": "T1", "exists": true, "data": { "listId": "L1", "text": "pack", "completed": true, "createdAtMillis": 1.0 } },
            { "id": "T2", "exists": true, "data": { "listId": "L1", "text": "fly", "createdAtMillis": null } }
        ]))
        .unwrap();

        let tasks = tasks_from_snapshots(snapshots).unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
        assert_eq!(tasks[1].text, "fly");
        assert!(tasks[1].created_at.is_none());
    }

    #[test]
    fn test_task_with_null_text_renders_empty() {
        let snapshots: Vec<DocumentSnapshot<TaskDocument>> = serde_json::from_value(json!([
            { "id": "T1", "exists": true, "data": { "listId": "L1", "text": null, "completed": false } },
            { "id": "T2", "exists": true, "data": { "listId": "L1" } }
        ]))
        .unwrap();

        let tasks = tasks_from_snapshots(snapshots).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "");
        assert_eq!(tasks[1].text, "");
    }

    #[test]
    fn test_task_without_data_is_an_error() {
        let snapshots: Vec<DocumentSnapshot<TaskDocument>> =
            serde_json::from_value(json!([{ "id": "T1", "exists": true, "data": null }])).unwrap();
        assert!(matches!(tasks_from_snapshots(snapshots), Err(StoreError::Decode(_))));
    }

    #[test]
    fn test_write_payloads() {
        let fields = NewTaskFields { list_id: "L1", text: "pack", completed: false };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({ "listId": "L1", "text": "pack", "completed": false })
        );
        assert_eq!(serde_json::to_value(ListFields { title: "Trip" }).unwrap(), json!({ "title": "Trip" }));
    }

    #[test]
    fn test_error_codes() {
        assert!(matches!(classify_error(Some("unavailable"), "x".into()), StoreError::Unavailable(_)));
        assert!(matches!(classify_error(Some("not-found"), "x".into()), StoreError::NotFound(_)));
        assert!(matches!(classify_error(Some("permission-denied"), "x".into()), StoreError::Rejected(_)));
        assert!(matches!(classify_error(None, "x".into()), StoreError::Rejected(_)));
    }
}
