//! In-memory document store
//!
//! Behaves like the realtime backend as far as the controller can tell:
//! ids and timestamps are assigned by the "server", every subscriber gets
//! the current snapshot on subscribe and a fresh full snapshot after each
//! write that touches its query. Used by tests and as local mode when no
//! backend is configured.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use uuid::Uuid;

use super::subscription::{SnapshotSender, Subscription};
use super::traits::{DocumentStore, IdentityProvider};
use crate::domain::{
    ListId, NewList, NewTask, SessionId, StoreError, StoreResult, Task, TaskId, TodoList,
};

#[derive(Debug, Clone)]
struct ListDoc {
    title: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct TaskDoc {
    list_id: ListId,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
    /// Insertion order, tie-breaker for equal timestamps
    seq: u64,
}

struct Watcher<T> {
    id: u64,
    list_id: ListId,
    sender: SnapshotSender<T>,
}

#[derive(Default)]
struct MemoryState {
    lists: HashMap<ListId, ListDoc>,
    tasks: HashMap<TaskId, TaskDoc>,
    seq: u64,
    last_timestamp: Option<DateTime<Utc>>,
    next_watcher: u64,
    list_watchers: Vec<Watcher<Option<TodoList>>>,
    task_watchers: Vec<Watcher<Vec<Task>>>,
    session: Option<SessionId>,
    write_failure: Option<StoreError>,
    sign_in_failure: Option<StoreError>,
}

impl MemoryState {
    /// Strictly increasing server clock
    fn server_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(stamp);
        stamp
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn check_writable(&self) -> StoreResult<()> {
        match &self.write_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn list_snapshot(&self, id: &ListId) -> Option<TodoList> {
        self.lists.get(id).map(|doc| TodoList {
            id: id.clone(),
            title: doc.title.clone(),
            created_at: Some(doc.created_at),
        })
    }

    fn tasks_snapshot(&self, list_id: &ListId) -> Vec<Task> {
        let mut docs: Vec<(&TaskId, &TaskDoc)> = self
            .tasks
            .iter()
            .filter(|(_, doc)| &doc.list_id == list_id)
            .collect();
        docs.sort_by_key(|(_, doc)| (doc.created_at, doc.seq));
        docs.into_iter()
            .map(|(id, doc)| Task {
                id: id.clone(),
                list_id: doc.list_id.clone(),
                text: doc.text.clone(),
                completed: doc.completed,
                created_at: Some(doc.created_at),
            })
            .collect()
    }

    fn publish_list(&mut self, id: &ListId) {
        let snapshot = self.list_snapshot(id);
        self.list_watchers.retain(|w| !w.sender.is_closed());
        for watcher in self.list_watchers.iter().filter(|w| &w.list_id == id) {
            watcher.sender.send(Ok(snapshot.clone()));
        }
    }

    fn publish_tasks(&mut self, list_id: &ListId) {
        let snapshot = self.tasks_snapshot(list_id);
        self.task_watchers.retain(|w| !w.sender.is_closed());
        for watcher in self.task_watchers.iter().filter(|w| &w.list_id == list_id) {
            watcher.sender.send(Ok(snapshot.clone()));
        }
    }
}

/// Shared in-memory store; clones refer to the same documents
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `error` (`None` restores writes)
    pub fn fail_writes_with(&self, error: Option<StoreError>) {
        self.state.borrow_mut().write_failure = error;
    }

    /// Make anonymous sign-in fail with `error` (`None` restores sign-in)
    pub fn fail_sign_in_with(&self, error: Option<StoreError>) {
        self.state.borrow_mut().sign_in_failure = error;
    }

    /// Number of live list and task subscriptions
    pub fn watcher_count(&self) -> usize {
        let state = self.state.borrow();
        state.list_watchers.iter().filter(|w| !w.sender.is_closed()).count()
            + state.task_watchers.iter().filter(|w| !w.sender.is_closed()).count()
    }

    pub fn list(&self, id: &ListId) -> Option<TodoList> {
        self.state.borrow().list_snapshot(id)
    }

    pub fn tasks(&self, list_id: &ListId) -> Vec<Task> {
        self.state.borrow().tasks_snapshot(list_id)
    }

    fn release_hook(&self, watcher_id: u64) -> impl FnOnce() + 'static {
        let state: Weak<RefCell<MemoryState>> = Rc::downgrade(&self.state);
        move || {
            if let Some(state) = state.upgrade() {
                let mut state = state.borrow_mut();
                state.list_watchers.retain(|w| w.id != watcher_id);
                state.task_watchers.retain(|w| w.id != watcher_id);
            }
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn create_list(&self, list: &NewList) -> StoreResult<ListId> {
        let mut state = self.state.borrow_mut();
        state.check_writable()?;

        let id = ListId::new(Uuid::new_v4().simple().to_string());
        let created_at = state.server_timestamp();
        state.lists.insert(
            id.clone(),
            ListDoc {
                title: list.title.clone(),
                created_at,
            },
        );
        state.publish_list(&id);
        Ok(id)
    }

    async fn rename_list(&self, id: &ListId, title: &str) -> StoreResult<()> {
        let mut state = self.state.borrow_mut();
        state.check_writable()?;

        let doc = state
            .lists
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("lists/{}", id)))?;
        doc.title = title.to_string();
        state.publish_list(id);
        Ok(())
    }

    async fn create_task(&self, task: &NewTask) -> StoreResult<TaskId> {
        let mut state = self.state.borrow_mut();
        state.check_writable()?;

        let id = TaskId::new(Uuid::new_v4().simple().to_string());
        let created_at = state.server_timestamp();
        let seq = state.next_seq();
        state.tasks.insert(
            id.clone(),
            TaskDoc {
                list_id: task.list_id.clone(),
                text: task.text.clone(),
                completed: false,
                created_at,
                seq,
            },
        );
        state.publish_tasks(&task.list_id);
        Ok(id)
    }

    async fn set_task_completed(&self, id: &TaskId, completed: bool) -> StoreResult<()> {
        let mut state = self.state.borrow_mut();
        state.check_writable()?;

        let doc = state
            .tasks
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("tasks/{}", id)))?;
        doc.completed = completed;
        let list_id = doc.list_id.clone();
        state.publish_tasks(&list_id);
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> StoreResult<()> {
        let mut state = self.state.borrow_mut();
        state.check_writable()?;

        if let Some(doc) = state.tasks.remove(id) {
            state.publish_tasks(&doc.list_id);
        }
        Ok(())
    }

    fn watch_list(&self, id: &ListId) -> Subscription<Option<TodoList>> {
        let (sender, subscription) = Subscription::channel();
        let mut state = self.state.borrow_mut();
        state.next_watcher += 1;
        let watcher_id = state.next_watcher;

        sender.send(Ok(state.list_snapshot(id)));
        state.list_watchers.push(Watcher {
            id: watcher_id,
            list_id: id.clone(),
            sender,
        });
        drop(state);

        subscription.on_release(self.release_hook(watcher_id))
    }

    fn watch_tasks(&self, list_id: &ListId) -> Subscription<Vec<Task>> {
        let (sender, subscription) = Subscription::channel();
        let mut state = self.state.borrow_mut();
        state.next_watcher += 1;
        let watcher_id = state.next_watcher;

        sender.send(Ok(state.tasks_snapshot(list_id)));
        state.task_watchers.push(Watcher {
            id: watcher_id,
            list_id: list_id.clone(),
            sender,
        });
        drop(state);

        subscription.on_release(self.release_hook(watcher_id))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for MemoryStore {
    async fn ensure_anonymous_session(&self) -> StoreResult<SessionId> {
        let mut state = self.state.borrow_mut();
        if let Some(err) = &state.sign_in_failure {
            return Err(err.clone());
        }
        let session = state
            .session
            .get_or_insert_with(|| SessionId::new(Uuid::new_v4().simple().to_string()));
        Ok(session.clone())
    }
}
