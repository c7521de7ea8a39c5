//! Repository Layer - Core Traits
//!
//! Defines the interfaces the controller is written against.
//! Implementations: Firebase (browser), in-memory (tests, local mode).

use async_trait::async_trait;

use super::subscription::Subscription;
use crate::domain::{ListId, NewList, NewTask, SessionId, StoreResult, Task, TaskId, TodoList};

/// Realtime document store holding the `lists` and `tasks` collections
///
/// Everything runs on the single-threaded browser event loop, so futures
/// are not required to be `Send`.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Create a list; the store assigns the id and the server timestamp
    async fn create_list(&self, list: &NewList) -> StoreResult<ListId>;

    /// Overwrite a list's title
    async fn rename_list(&self, id: &ListId, title: &str) -> StoreResult<()>;

    /// Create a task with `completed = false`
    async fn create_task(&self, task: &NewTask) -> StoreResult<TaskId>;

    async fn set_task_completed(&self, id: &TaskId, completed: bool) -> StoreResult<()>;

    /// Delete a task. Deleting a task that no longer exists succeeds.
    async fn delete_task(&self, id: &TaskId) -> StoreResult<()>;

    /// Live view of one list document; `None` while it does not exist
    fn watch_list(&self, id: &ListId) -> Subscription<Option<TodoList>>;

    /// Live view of a list's tasks ordered by creation time ascending
    fn watch_tasks(&self, list_id: &ListId) -> Subscription<Vec<Task>>;
}

/// Issues anonymous sessions so the backend's access rules accept writes
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Reuse the current anonymous session or sign in a new one
    async fn ensure_anonymous_session(&self) -> StoreResult<SessionId>;
}
