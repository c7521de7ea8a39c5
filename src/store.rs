//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! owns the truth; `store_apply_view` copies each new view state in.

use leptos::prelude::*;
use reactive_stores::Store;
use wishlink_core::{Phase, Task, TodoList, ViewState};

/// Render-ready state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub phase: Phase,
    /// The list being shown (None on the landing view)
    pub list: Option<TodoList>,
    pub tasks: Vec<Task>,
    /// Title field of the creation form
    pub title_input: String,
    pub new_task_input: String,
    pub creating: bool,
    /// Landing hero animation finished
    pub hero_done: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Mirror a controller state into the store
pub fn store_apply_view(store: &AppStore, view: &ViewState) {
    let phase = view.phase();
    let list = if phase.shows_list() {
        view.current_list().cloned()
    } else {
        None
    };

    *store.phase().write() = phase;
    *store.list().write() = list;
    *store.tasks().write() = view.tasks.clone();
    *store.title_input().write() = view.title_input.clone();
    *store.new_task_input().write() = view.new_task_input.clone();
    *store.creating().write() = view.creating;
}
