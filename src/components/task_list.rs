//! Task List Component

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().get()
                // Every field a push can change, so the row re-renders
                key=|task| (task.id.clone(), task.text.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
