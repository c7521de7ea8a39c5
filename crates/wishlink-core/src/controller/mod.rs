//! View State Controller
//!
//! Bridges user intent to document store calls and store pushes to
//! render-ready [`ViewState`]. The UI observes state through a callback and
//! never talks to the store directly.
//!
//! Subscriptions: one list and one task subscription per selected list,
//! each pumped by a local task whose abort handle the controller owns.
//! Selecting another list (or tearing down) aborts both before anything new
//! is started; dropping the pump drops the [`Subscription`] and with it the
//! backend listener.

mod view_state;


use futures::future::{abortable, AbortHandle};
use futures::StreamExt;
use std::cell::RefCell;
use std::rc::Rc;

pub use view_state::{ListRecord, Phase, ViewState};

use crate::domain::{
    effective_title, ListId, NewList, NewTask, SessionId, StoreError, StoreResult, Task, TaskId,
    TodoList,
};
use crate::location::{list_id_from_location, location_with_list};
use crate::platform::Platform;
use crate::repository::{DocumentStore, IdentityProvider, Subscription};

/// Confirmation shown after the share link was copied
pub const SHARE_CONFIRMATION: &str = "共有リンクをコピーしました！";

/// Write operations, each reported separately when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    CreateList,
    AddTask,
    UpdateTask,
    DeleteTask,
    RenameList,
}

impl WriteAction {
    /// Alert text naming the failed action
    pub fn failure_message(self) -> &'static str {
        match self {
            WriteAction::CreateList => "リスト作成に失敗しました。Consoleを確認してください。",
            WriteAction::AddTask => "タスク追加に失敗しました。Consoleを確認してください。",
            WriteAction::UpdateTask => "更新に失敗しました。Consoleを確認してください。",
            WriteAction::DeleteTask => "削除に失敗しました。Consoleを確認してください。",
            WriteAction::RenameList => "タイトル更新に失敗しました。Consoleを確認してください。",
        }
    }

    fn label(self) -> &'static str {
        match self {
            WriteAction::CreateList => "create list",
            WriteAction::AddTask => "add task",
            WriteAction::UpdateTask => "update task",
            WriteAction::DeleteTask => "delete task",
            WriteAction::RenameList => "rename list",
        }
    }
}

type StateObserver = Rc<dyn Fn(&ViewState)>;

/// State plus the observer to tell about changes; shared with the pumps
#[derive(Default)]
struct SharedState {
    view: RefCell<ViewState>,
    observer: RefCell<Option<StateObserver>>,
}

impl SharedState {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let result = f(&mut self.view.borrow_mut());
        self.notify();
        result
    }

    fn notify(&self) {
        let snapshot = self.view.borrow().clone();
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(&snapshot);
        }
    }
}

/// Abort handles of the pumps serving one list
struct ActiveSubscriptions {
    list_id: ListId,
    list: AbortHandle,
    tasks: AbortHandle,
}

impl Drop for ActiveSubscriptions {
    fn drop(&mut self) {
        self.list.abort();
        self.tasks.abort();
        log::debug!("Released subscriptions for list {}", self.list_id);
    }
}

struct Inner {
    store: Rc<dyn DocumentStore>,
    identity: Rc<dyn IdentityProvider>,
    platform: Rc<dyn Platform>,
    shared: Rc<SharedState>,
    subscriptions: RefCell<Option<ActiveSubscriptions>>,
}

/// Cheap to clone; the last clone to go releases the subscriptions
#[derive(Clone)]
pub struct TodoController {
    inner: Rc<Inner>,
}

impl TodoController {
    pub fn new(
        store: Rc<dyn DocumentStore>,
        identity: Rc<dyn IdentityProvider>,
        platform: Rc<dyn Platform>,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                store,
                identity,
                platform,
                shared: Rc::new(SharedState::default()),
                subscriptions: RefCell::new(None),
            }),
        }
    }

    /// Call `observer` now and after every state change
    pub fn observe(&self, observer: impl Fn(&ViewState) + 'static) {
        *self.inner.shared.observer.borrow_mut() = Some(Rc::new(observer));
        self.inner.shared.notify();
    }

    /// Copy of the current state
    pub fn view(&self) -> ViewState {
        self.inner.shared.view.borrow().clone()
    }

    // ========================
    // Session & selection
    // ========================

    /// Obtain an anonymous session. Failures are logged and otherwise ignored.
    pub async fn establish_session(&self) -> Option<SessionId> {
        match self.inner.identity.ensure_anonymous_session().await {
            Ok(session) => {
                log::info!("Anonymous session established");
                self.inner
                    .shared
                    .update(|view| view.session = Some(session.clone()));
                Some(session)
            }
            Err(err) => {
                log::error!("Anonymous sign-in failed: {}", err);
                None
            }
        }
    }

    /// Select the list named by the location's `list` parameter (or none)
    pub fn resolve_list_from_location(&self) -> Option<ListId> {
        let href = self.inner.platform.current_location();
        let list_id = match list_id_from_location(&href) {
            Ok(list_id) => list_id,
            Err(err) => {
                log::warn!("Ignoring unreadable location: {}", err);
                None
            }
        };
        self.select_list(list_id.clone());
        list_id
    }

    fn select_list(&self, list_id: Option<ListId>) {
        let current = self.inner.shared.view.borrow().list_id.clone();
        let subscribed = self.inner.subscriptions.borrow().is_some();
        if current == list_id && (list_id.is_none() || subscribed) {
            return;
        }

        self.release_subscriptions();
        self.inner.shared.update(|view| view.select(list_id.clone()));

        match &list_id {
            Some(id) => {
                log::info!("Selected list {}", id);
                self.subscribe(id);
            }
            None => log::info!("No list selected"),
        }
    }

    fn subscribe(&self, list_id: &ListId) {
        let list_pump = pump(
            self.inner.shared.clone(),
            list_id.clone(),
            "list",
            self.subscribe_to_list(list_id),
            ViewState::apply_list_snapshot,
        );
        let task_pump = pump(
            self.inner.shared.clone(),
            list_id.clone(),
            "tasks",
            self.subscribe_to_tasks(list_id),
            ViewState::apply_tasks_snapshot,
        );

        let (list_pump, list_handle) = abortable(list_pump);
        let (task_pump, task_handle) = abortable(task_pump);
        self.inner.platform.spawn(Box::pin(async move {
            let _ = list_pump.await;
        }));
        self.inner.platform.spawn(Box::pin(async move {
            let _ = task_pump.await;
        }));

        *self.inner.subscriptions.borrow_mut() = Some(ActiveSubscriptions {
            list_id: list_id.clone(),
            list: list_handle,
            tasks: task_handle,
        });
    }

    /// Live list document for `list_id`
    pub fn subscribe_to_list(&self, list_id: &ListId) -> Subscription<Option<TodoList>> {
        self.inner.store.watch_list(list_id)
    }

    /// Live tasks of `list_id`, creation order
    pub fn subscribe_to_tasks(&self, list_id: &ListId) -> Subscription<Vec<Task>> {
        self.inner.store.watch_tasks(list_id)
    }

    fn release_subscriptions(&self) {
        let released = self.inner.subscriptions.borrow_mut().take();
        drop(released);
    }

    /// Stop all live delivery (component teardown)
    pub fn teardown(&self) {
        self.release_subscriptions();
    }

    // ========================
    // Input buffers
    // ========================

    pub fn set_title_input(&self, text: &str) {
        self.inner
            .shared
            .update(|view| view.title_input = text.to_string());
    }

    pub fn set_new_task_input(&self, text: &str) {
        self.inner
            .shared
            .update(|view| view.new_task_input = text.to_string());
    }

    /// Edit the shown title locally; `rename_list` persists it
    pub fn edit_title(&self, text: &str) {
        self.inner.shared.update(|view| view.edit_title(text));
    }

    // ========================
    // Writes
    // ========================

    /// Create a list, put its id in the location and show it right away
    pub async fn create_list(&self, title: &str) -> StoreResult<ListId> {
        let draft = NewList::from_input(title);
        self.inner.shared.update(|view| view.creating = true);

        let result = self.inner.store.create_list(&draft).await;
        let outcome = match result {
            Ok(id) => {
                log::info!("Created list {}", id);
                self.publish_location(&id);
                self.select_list(Some(id.clone()));
                self.inner
                    .shared
                    .update(|view| view.show_speculative(TodoList::new(id.clone(), draft.title)));
                Ok(id)
            }
            Err(err) => {
                self.report_failure(WriteAction::CreateList, &err);
                Err(err)
            }
        };

        self.inner.shared.update(|view| view.creating = false);
        outcome
    }

    /// Add a task to the shown list. `Ok(None)` when there is nothing to add.
    pub async fn add_task(&self, text: &str) -> StoreResult<Option<TaskId>> {
        let draft = {
            let view = self.inner.shared.view.borrow();
            view.current_list()
                .and_then(|list| NewTask::from_input(&list.id, text))
        };
        let Some(draft) = draft else {
            return Ok(None);
        };

        match self.inner.store.create_task(&draft).await {
            Ok(id) => {
                log::debug!("Added task {} to list {}", id, draft.list_id);
                self.inner.shared.update(|view| view.new_task_input.clear());
                Ok(Some(id))
            }
            Err(err) => {
                self.report_failure(WriteAction::AddTask, &err);
                Err(err)
            }
        }
    }

    pub async fn toggle_task(&self, task: &Task) -> StoreResult<()> {
        self.inner
            .store
            .set_task_completed(&task.id, !task.completed)
            .await
            .map_err(|err| self.report_failure(WriteAction::UpdateTask, &err))
    }

    pub async fn remove_task(&self, task: &Task) -> StoreResult<()> {
        self.inner
            .store
            .delete_task(&task.id)
            .await
            .map_err(|err| self.report_failure(WriteAction::DeleteTask, &err))
    }

    /// Persist a new title for the shown list; blank falls back to the default
    pub async fn rename_list(&self, new_title: &str) -> StoreResult<()> {
        let list_id = self.current_list_id();
        let Some(list_id) = list_id else {
            return Ok(());
        };

        self.inner
            .store
            .rename_list(&list_id, &effective_title(new_title))
            .await
            .map_err(|err| self.report_failure(WriteAction::RenameList, &err))
    }

    /// Copy the link to the shown list and confirm. Returns the copied link.
    pub fn share_link(&self) -> Option<String> {
        let list_id = self.current_list_id()?;
        let href = self.inner.platform.current_location();
        let link = match location_with_list(&href, &list_id) {
            Ok(link) => link,
            Err(err) => {
                log::warn!("Cannot build share link: {}", err);
                return None;
            }
        };

        self.inner.platform.copy_to_clipboard(&link);
        self.inner.platform.alert(SHARE_CONFIRMATION);
        Some(link)
    }

    // ========================
    // Helpers
    // ========================

    fn current_list_id(&self) -> Option<ListId> {
        let view = self.inner.shared.view.borrow();
        view.current_list().map(|list| list.id.clone())
    }

    fn publish_location(&self, list_id: &ListId) {
        let href = self.inner.platform.current_location();
        match location_with_list(&href, list_id) {
            Ok(updated) => self.inner.platform.replace_location(&updated),
            Err(err) => log::warn!("Cannot put list {} into the location: {}", list_id, err),
        }
    }

    /// Log and alert; returns the error for `map_err` chains
    fn report_failure(&self, action: WriteAction, err: &StoreError) -> StoreError {
        log::error!("Failed to {}: {}", action.label(), err);
        self.inner.platform.alert(action.failure_message());
        err.clone()
    }
}

/// Feed snapshots for `list_id` into the view until the stream ends or the
/// pump is aborted. Snapshots for a list that is no longer selected are
/// dropped.
async fn pump<T>(
    shared: Rc<SharedState>,
    list_id: ListId,
    label: &'static str,
    mut subscription: Subscription<T>,
    apply: fn(&mut ViewState, T),
) {
    while let Some(snapshot) = subscription.next().await {
        match snapshot {
            Ok(value) => {
                let selected = shared.view.borrow().list_id.as_ref() == Some(&list_id);
                if selected {
                    log::debug!("Applying {} snapshot for list {}", label, list_id);
                    shared.update(|view| apply(view, value));
                } else {
                    log::debug!("Dropping stale {} snapshot for list {}", label, list_id);
                }
            }
            Err(err) => log::error!("{} subscription for list {} failed: {}", label, list_id, err),
        }
    }
    log::debug!("{} subscription for list {} ended", label, list_id);
}
