//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use wishlink_core::TodoController;

use crate::firebase::BackendMode;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller lives in local (non-Send) storage; copy the handle freely
    controller: StoredValue<TodoController, LocalStorage>,
    pub mode: BackendMode,
}

impl AppContext {
    pub fn new(controller: TodoController, mode: BackendMode) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            mode,
        }
    }

    pub fn controller(&self) -> TodoController {
        self.controller.get_value()
    }

    /// Release live subscriptions (component teardown)
    pub fn teardown(&self) {
        if let Some(controller) = self.controller.try_get_value() {
            controller.teardown();
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
