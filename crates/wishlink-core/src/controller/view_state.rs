//! View State
//!
//! Transient mirror of the backend plus the form buffers. The backend stays
//! authoritative: every snapshot replaces what is here wholesale.

use crate::domain::{ListId, Progress, SessionId, Task, TodoList, DEFAULT_LIST_TITLE};

/// What is known about the selected list document
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListRecord {
    /// No snapshot received yet (or no list selected)
    #[default]
    Unresolved,
    /// Shown before the backend confirms a freshly created list
    Speculative(TodoList),
    Confirmed(TodoList),
    /// The backend reports no such list
    Missing,
}

impl ListRecord {
    pub fn list(&self) -> Option<&TodoList> {
        match self {
            ListRecord::Speculative(list) | ListRecord::Confirmed(list) => Some(list),
            ListRecord::Unresolved | ListRecord::Missing => None,
        }
    }

    fn list_mut(&mut self) -> Option<&mut TodoList> {
        match self {
            ListRecord::Speculative(list) | ListRecord::Confirmed(list) => Some(list),
            ListRecord::Unresolved | ListRecord::Missing => None,
        }
    }
}

/// UI phase; everything except `ListSelected` renders the landing view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NoListSelected,
    /// List id known, waiting for the first snapshot
    Resolving,
    ListNotFound,
    ListSelected,
}

impl Phase {
    pub fn shows_list(self) -> bool {
        self == Phase::ListSelected
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub session: Option<SessionId>,
    /// List id from the location or from a just-created list
    pub list_id: Option<ListId>,
    pub list: ListRecord,
    /// Tasks of the selected list, creation order
    pub tasks: Vec<Task>,
    /// Title field of the creation form
    pub title_input: String,
    pub new_task_input: String,
    /// A list creation is in flight
    pub creating: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            session: None,
            list_id: None,
            list: ListRecord::Unresolved,
            tasks: Vec::new(),
            title_input: DEFAULT_LIST_TITLE.to_string(),
            new_task_input: String::new(),
            creating: false,
        }
    }
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        match (&self.list_id, &self.list) {
            (None, _) => Phase::NoListSelected,
            (Some(_), ListRecord::Unresolved) => Phase::Resolving,
            (Some(_), ListRecord::Missing) => Phase::ListNotFound,
            (Some(_), _) => Phase::ListSelected,
        }
    }

    /// The list being shown, if any
    pub fn current_list(&self) -> Option<&TodoList> {
        if self.list_id.is_none() {
            return None;
        }
        self.list.list()
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.tasks)
    }

    /// Switch to another list (or none); mirrored data of the old one goes
    pub(crate) fn select(&mut self, list_id: Option<ListId>) {
        self.list_id = list_id;
        self.list = ListRecord::Unresolved;
        self.tasks.clear();
    }

    /// Only fills the gap before the first authoritative snapshot
    pub(crate) fn show_speculative(&mut self, list: TodoList) {
        if self.list == ListRecord::Unresolved && self.list_id.as_ref() == Some(&list.id) {
            self.list = ListRecord::Speculative(list);
        }
    }

    pub(crate) fn apply_list_snapshot(&mut self, record: Option<TodoList>) {
        self.list = match record {
            Some(list) => ListRecord::Confirmed(list),
            None => ListRecord::Missing,
        };
    }

    pub(crate) fn apply_tasks_snapshot(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Local-only title edit while typing
    pub(crate) fn edit_title(&mut self, title: &str) {
        if let Some(list) = self.list.list_mut() {
            list.title = title.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(id: &str, title: &str) -> TodoList {
        TodoList::new(ListId::new(id), title)
    }

    #[test]
    fn test_initial_state() {
        let view = ViewState::default();
        assert_eq!(view.phase(), Phase::NoListSelected);
        assert_eq!(view.title_input, DEFAULT_LIST_TITLE);
        assert!(view.current_list().is_none());
    }

    #[test]
    fn test_phases() {
        let mut view = ViewState::default();
        view.select(Some(ListId::new("a")));
        assert_eq!(view.phase(), Phase::Resolving);

        view.apply_list_snapshot(None);
        assert_eq!(view.phase(), Phase::ListNotFound);
        assert!(!view.phase().shows_list());

        view.apply_list_snapshot(Some(list("a", "Trip")));
        assert_eq!(view.phase(), Phase::ListSelected);
        assert_eq!(view.current_list().unwrap().title, "Trip");
    }

    #[test]
    fn test_speculative_discarded_by_snapshot() {
        let mut view = ViewState::default();
        view.select(Some(ListId::new("a")));
        view.show_speculative(list("a", "typed"));
        assert!(matches!(view.list, ListRecord::Speculative(_)));

        view.apply_list_snapshot(Some(list("a", "stored")));
        assert_eq!(view.list, ListRecord::Confirmed(list("a", "stored")));
    }

    #[test]
    fn test_speculative_never_overrides_snapshot() {
        let mut view = ViewState::default();
        view.select(Some(ListId::new("a")));
        view.apply_list_snapshot(Some(list("a", "stored")));
        view.show_speculative(list("a", "typed"));
        assert_eq!(view.current_list().unwrap().title, "stored");
    }

    #[test]
    fn test_select_clears_mirror() {
        let mut view = ViewState::default();
        view.select(Some(ListId::new("a")));
        view.apply_list_snapshot(Some(list("a", "Trip")));
        view.apply_tasks_snapshot(vec![]);
        view.select(None);
        assert_eq!(view.list, ListRecord::Unresolved);
        assert!(view.tasks.is_empty());
        assert_eq!(view.phase(), Phase::NoListSelected);
    }

    #[test]
    fn test_edit_title_is_local() {
        let mut view = ViewState::default();
        view.edit_title("ignored");
        assert!(view.current_list().is_none());

        view.select(Some(ListId::new("a")));
        view.apply_list_snapshot(Some(list("a", "Trip")));
        view.edit_title("Trip 2");
        assert_eq!(view.current_list().unwrap().title, "Trip 2");
    }
}
