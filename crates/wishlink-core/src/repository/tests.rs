//! Repository Integration Tests
//!
//! Tests for MemoryStore writes and push subscriptions.

#[cfg(test)]
mod tests {
    use crate::domain::{ListId, NewList, NewTask, StoreError, TaskId};
    use crate::repository::{DocumentStore, IdentityProvider, MemoryStore};
    use futures::{FutureExt, StreamExt};

    async fn setup_list(store: &MemoryStore, title: &str) -> ListId {
        store
            .create_list(&NewList::from_input(title))
            .await
            .expect("Failed to create list")
    }

    async fn add(store: &MemoryStore, list: &ListId, text: &str) -> TaskId {
        let task = NewTask::from_input(list, text).expect("non-empty text");
        store.create_task(&task).await.expect("Failed to create task")
    }

    #[tokio::test]
    async fn test_create_list() {
        let store = MemoryStore::new();
        let id = setup_list(&store, "Trip Plans").await;

        let list = store.list(&id).expect("list stored");
        assert_eq!(list.title, "Trip Plans");
        assert!(list.created_at.is_some());
    }

    #[tokio::test]
    async fn test_watch_list_delivers_current_snapshot() {
        let store = MemoryStore::new();
        let id = setup_list(&store, "Groceries").await;

        let mut watch = store.watch_list(&id);
        let first = watch.next().await.expect("snapshot").expect("ok");
        assert_eq!(first.map(|l| l.title), Some("Groceries".to_string()));
    }

    #[tokio::test]
    async fn test_watch_unknown_list_yields_none() {
        let store = MemoryStore::new();
        let mut watch = store.watch_list(&ListId::new("nope"));
        assert_eq!(watch.next().await, Some(Ok(None)));
    }

    #[tokio::test]
    async fn test_rename_pushes_new_snapshot() {
        let store = MemoryStore::new();
        let id = setup_list(&store, "Old").await;
        let mut watch = store.watch_list(&id);
        let _ = watch.next().await;

        store.rename_list(&id, "New").await.expect("rename");

        let renamed = watch.next().await.expect("snapshot").expect("ok");
        assert_eq!(renamed.unwrap().title, "New");
        assert!(watch.next().now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_rename_missing_list() {
        let store = MemoryStore::new();
        let result = store.rename_list(&ListId::new("ghost"), "x").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_tasks_filtered_and_ordered() {
        let store = MemoryStore::new();
        let trip = setup_list(&store, "Trip").await;
        let chores = setup_list(&store, "Chores").await;

        add(&store, &trip, "book hotel").await;
        add(&store, &chores, "laundry").await;
        add(&store, &trip, "pack bags").await;

        let mut watch = store.watch_tasks(&trip);
        let tasks = watch.next().await.expect("snapshot").expect("ok");
        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["book hotel", "pack bags"]);
        assert!(tasks.iter().all(|t| !t.completed && t.list_id == trip));
    }

    #[tokio::test]
    async fn test_task_writes_push_full_snapshots() {
        let store = MemoryStore::new();
        let list = setup_list(&store, "Trip").await;
        let mut watch = store.watch_tasks(&list);
        assert_eq!(watch.next().await, Some(Ok(vec![])));

        let id = add(&store, &list, "onsen").await;
        let added = watch.next().await.unwrap().unwrap();
        assert_eq!(added.len(), 1);

        store.set_task_completed(&id, true).await.expect("toggle");
        let toggled = watch.next().await.unwrap().unwrap();
        assert!(toggled[0].completed);

        store.delete_task(&id).await.expect("delete");
        assert_eq!(watch.next().await, Some(Ok(vec![])));
    }

    #[tokio::test]
    async fn test_writes_to_other_lists_are_not_pushed() {
        let store = MemoryStore::new();
        let trip = setup_list(&store, "Trip").await;
        let chores = setup_list(&store, "Chores").await;
        let mut watch = store.watch_tasks(&trip);
        let _ = watch.next().await;

        add(&store, &chores, "dishes").await;

        assert!(watch.next().now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_toggle_missing_task() {
        let store = MemoryStore::new();
        let result = store.set_task_completed(&TaskId::new("ghost"), true).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_task_succeeds() {
        let store = MemoryStore::new();
        assert!(store.delete_task(&TaskId::new("ghost")).await.is_ok());
    }

    #[tokio::test]
    async fn test_dropping_subscription_releases_watcher() {
        let store = MemoryStore::new();
        let list = setup_list(&store, "Trip").await;

        let list_watch = store.watch_list(&list);
        let task_watch = store.watch_tasks(&list);
        assert_eq!(store.watcher_count(), 2);

        drop(list_watch);
        assert_eq!(store.watcher_count(), 1);
        drop(task_watch);
        assert_eq!(store.watcher_count(), 0);

        // Writes after release must not fail
        add(&store, &list, "still works").await;
    }

    #[tokio::test]
    async fn test_injected_write_failure() {
        let store = MemoryStore::new();
        let list = setup_list(&store, "Trip").await;
        store.fail_writes_with(Some(StoreError::Unavailable("offline".into())));

        let task = NewTask::from_input(&list, "x").unwrap();
        let result = store.create_task(&task).await;
        assert_eq!(result, Err(StoreError::Unavailable("offline".into())));
        assert!(store.tasks(&list).is_empty());

        store.fail_writes_with(None);
        assert!(store.create_task(&task).await.is_ok());
    }

    #[tokio::test]
    async fn test_anonymous_session_is_reused() {
        let store = MemoryStore::new();
        let first = store.ensure_anonymous_session().await.expect("sign in");
        let second = store.ensure_anonymous_session().await.expect("sign in");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_sign_in_failure() {
        let store = MemoryStore::new();
        store.fail_sign_in_with(Some(StoreError::Unavailable("auth down".into())));
        assert!(store.ensure_anonymous_session().await.is_err());
    }
}
