//! Domain Layer
//!
//! Lists, tasks and what the view derives from them.
//! This layer has NO external dependencies (except serde/chrono/thiserror).

mod error;
mod ids;
mod list;
mod progress;
mod task;

pub use error::{StoreError, StoreResult};
pub use ids::{ListId, SessionId, TaskId};
pub use list::{effective_title, NewList, TodoList, DEFAULT_LIST_TITLE, UNTITLED_LIST_TITLE};
pub use progress::Progress;
pub use task::{NewTask, Task};
