//! Host environment seen by the controller.
//!
//! The browser implementation lives in the frontend crate; tests use a
//! recording fake.

use futures::future::LocalBoxFuture;

pub trait Platform {
    /// Full current location (`window.location.href`)
    fn current_location(&self) -> String;

    /// Replace the current history entry without navigating
    fn replace_location(&self, href: &str);

    fn copy_to_clipboard(&self, text: &str);

    /// Blocking user-facing message
    fn alert(&self, message: &str);

    /// Run a task on the local (single-threaded) executor
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
