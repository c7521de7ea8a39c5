//! UI Components
//!
//! Leptos components for the landing view and the shared list.

mod hero;
mod hints;
mod list_card;
mod list_header;
mod new_task_form;
mod progress_bar;
mod task_list;
mod task_row;
mod top_bar;

pub use hero::Hero;
pub use hints::Hints;
pub use list_card::ListCard;
pub use list_header::ListHeader;
pub use new_task_form::NewTaskForm;
pub use progress_bar::ProgressBar;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use top_bar::TopBar;
