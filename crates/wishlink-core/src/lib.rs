//! WishLink Core
//!
//! Layered architecture:
//! - domain: lists, tasks and the values derived from them for display
//! - repository: document store abstraction, push subscriptions, in-memory store
//! - controller: view state and the operations the UI invokes
//!
//! Nothing here touches the browser; the frontend injects a [`Platform`].

pub mod config;
pub mod controller;
pub mod domain;
pub mod location;
pub mod platform;
pub mod repository;

pub use config::{ConfigError, FirebaseConfig};
pub use controller::{ListRecord, Phase, TodoController, ViewState, WriteAction};
pub use domain::{
    effective_title, ListId, NewList, NewTask, Progress, SessionId, StoreError, StoreResult,
    Task, TaskId, TodoList, DEFAULT_LIST_TITLE, UNTITLED_LIST_TITLE,
};
pub use location::{list_id_from_location, location_with_list, LocationError, LIST_QUERY_PARAM};
pub use platform::Platform;
pub use repository::{DocumentStore, IdentityProvider, MemoryStore, SnapshotSender, Subscription};
