//! New Task Form Component
//!
//! Adds a task to the open list. The field is cleared by the controller
//! once the store accepted the task.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let add_task = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = store.new_task_input().get_untracked();
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.add_task(&text).await;
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="やりたいことを入力 (例: 箱根温泉に行く)"
                prop:value=move || store.new_task_input().get()
                on:input=move |ev| ctx.controller().set_new_task_input(&event_target_value(&ev))
            />
            <button type="submit" class="secondary-btn">"追加"</button>
        </form>
    }
}
