//! Task Row Component
//!
//! Completion toggle, text and delete button for one task.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wishlink_core::Task;

use crate::context::use_app_context;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let completed = task.completed;
    let text = task.text.clone();
    let toggle_label = if completed { "未完了にする" } else { "完了にする" };

    let toggle_task = {
        let task = task.clone();
        move |_| {
            let task = task.clone();
            let controller = ctx.controller();
            spawn_local(async move {
                let _ = controller.toggle_task(&task).await;
            });
        }
    };

    let remove_task = move |_| {
        let task = task.clone();
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.remove_task(&task).await;
        });
    };

    view! {
        <li class="task-row">
            <button
                class=if completed { "task-toggle checked" } else { "task-toggle" }
                aria-label=toggle_label
                title=toggle_label
                on:click=toggle_task
            >
                {if completed { "✓" } else { "" }}
            </button>
            <span class=if completed { "task-text completed" } else { "task-text" }>{text}</span>
            <button class="task-delete" title="削除" on:click=remove_task>
                "×"
            </button>
        </li>
    }
}
