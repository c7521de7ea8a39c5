//! Firebase-backed document store
//!
//! One client per page: `get_or_init` hands out the same handle however
//! often it is called, and the bridge refuses to build a second SDK app.

use async_trait::async_trait;
use std::cell::OnceCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wishlink_core::{
    DocumentStore, FirebaseConfig, IdentityProvider, ListId, NewList, NewTask, SessionId,
    SnapshotSender, StoreError, StoreResult, Subscription, Task, TaskId, TodoList,
};

use super::bridge;
use super::documents::{
    classify_error, list_from_snapshot, tasks_from_snapshots, CompletedField, DocumentSnapshot,
    ListDocument, ListFields, NewTaskFields, TaskDocument, FIELD_CREATED_AT, FIELD_LIST_ID, LISTS,
    TASKS,
};

thread_local! {
    static CLIENT: OnceCell<Rc<FirebaseClient>> = OnceCell::new();
}

pub struct FirebaseClient {
    project_id: String,
}

impl FirebaseClient {
    /// The page-wide client, initializing the SDK on first use
    pub fn get_or_init(config: &FirebaseConfig) -> StoreResult<Rc<Self>> {
        CLIENT.with(|cell| {
            if let Some(client) = cell.get() {
                return Ok(client.clone());
            }

            let js_config = to_js(config)?;
            bridge::init(js_config).map_err(js_error)?;
            let client = Rc::new(Self {
                project_id: config.project_id.clone(),
            });
            let _ = cell.set(client.clone());
            log::info!("Firebase client initialized for project {}", client.project_id);
            Ok(client)
        })
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> StoreResult<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Read `code` and `message` off a JS error object
fn js_error(err: JsValue) -> StoreError {
    let field = |name: &str| {
        js_sys::Reflect::get(&err, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_string())
    };
    let code = field("code");
    let message = field("message").unwrap_or_else(|| format!("{:?}", err));
    classify_error(code.as_deref(), message)
}

fn error_callback<T: 'static>(sender: SnapshotSender<T>) -> Closure<dyn FnMut(JsValue)> {
    Closure::new(move |err: JsValue| {
        sender.send(Err(js_error(err)));
    })
}

/// Keep the callbacks alive until the subscription is dropped, then
/// unsubscribe. On registration failure the error becomes the first item.
fn attach<T: 'static>(
    subscription: Subscription<T>,
    error_sender: SnapshotSender<T>,
    registered: Result<js_sys::Function, JsValue>,
    on_next: Closure<dyn FnMut(JsValue)>,
    on_error: Closure<dyn FnMut(JsValue)>,
) -> Subscription<T> {
    match registered {
        Ok(unsubscribe) => subscription.on_release(move || {
            if let Err(err) = unsubscribe.call0(&JsValue::NULL) {
                log::warn!("Unsubscribe failed: {:?}", err);
            }
            drop(on_next);
            drop(on_error);
        }),
        Err(err) => {
            error_sender.send(Err(js_error(err)));
            subscription
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirebaseClient {
    async fn create_list(&self, list: &NewList) -> StoreResult<ListId> {
        let data = to_js(&ListFields { title: &list.title })?;
        let id = bridge::add_document(LISTS, data).await.map_err(js_error)?;
        id.as_string()
            .map(ListId::new)
            .ok_or_else(|| StoreError::Decode("addDocument returned no id".into()))
    }

    async fn rename_list(&self, id: &ListId, title: &str) -> StoreResult<()> {
        let data = to_js(&ListFields { title })?;
        bridge::update_document(LISTS, id.as_str(), data)
            .await
            .map_err(js_error)?;
        Ok(())
    }

    async fn create_task(&self, task: &NewTask) -> StoreResult<TaskId> {
        let data = to_js(&NewTaskFields {
            list_id: task.list_id.as_str(),
            text: &task.text,
            completed: false,
        })?;
        let id = bridge::add_document(TASKS, data).await.map_err(js_error)?;
        id.as_string()
            .map(TaskId::new)
            .ok_or_else(|| StoreError::Decode("addDocument returned no id".into()))
    }

    async fn set_task_completed(&self, id: &TaskId, completed: bool) -> StoreResult<()> {
        let data = to_js(&CompletedField { completed })?;
        bridge::update_document(TASKS, id.as_str(), data)
            .await
            .map_err(js_error)?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> StoreResult<()> {
        bridge::delete_document(TASKS, id.as_str())
            .await
            .map_err(js_error)?;
        Ok(())
    }

    fn watch_list(&self, id: &ListId) -> Subscription<Option<TodoList>> {
        let (sender, subscription) = Subscription::channel();
        let error_sender = sender.clone();

        let next_sender = sender.clone();
        let on_next = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let snapshot = serde_wasm_bindgen::from_value::<DocumentSnapshot<ListDocument>>(value)
                .map(list_from_snapshot)
                .map_err(|e| StoreError::Decode(e.to_string()));
            next_sender.send(snapshot);
        });
        let on_error = error_callback(sender);

        let registered = bridge::watch_document(LISTS, id.as_str(), &on_next, &on_error);
        attach(subscription, error_sender, registered, on_next, on_error)
    }

    fn watch_tasks(&self, list_id: &ListId) -> Subscription<Vec<Task>> {
        let (sender, subscription) = Subscription::channel();
        let error_sender = sender.clone();

        let next_sender = sender.clone();
        let on_next = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            let snapshot =
                serde_wasm_bindgen::from_value::<Vec<DocumentSnapshot<TaskDocument>>>(value)
                    .map_err(|e| StoreError::Decode(e.to_string()))
                    .and_then(tasks_from_snapshots);
            next_sender.send(snapshot);
        });
        let on_error = error_callback(sender);

        // Needs the composite index (listId ASC, createdAt ASC)
        let registered = bridge::watch_query(
            TASKS,
            FIELD_LIST_ID,
            list_id.as_str(),
            FIELD_CREATED_AT,
            &on_next,
            &on_error,
        );
        attach(subscription, error_sender, registered, on_next, on_error)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseClient {
    async fn ensure_anonymous_session(&self) -> StoreResult<SessionId> {
        let uid = bridge::ensure_anonymous_session().await.map_err(js_error)?;
        uid.as_string()
            .map(SessionId::new)
            .ok_or_else(|| StoreError::Decode("anonymous sign-in returned no uid".into()))
    }
}
