//! List Header Component
//!
//! Title field plus the main action: "create" on the landing view,
//! "copy share link" once a list is open.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wishlink_core::DEFAULT_LIST_TITLE;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListHeader() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let shows_list = move || store.phase().get().shows_list();

    let create_list = move |_| {
        let title = store.title_input().get_untracked();
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.create_list(&title).await;
        });
    };

    let share_link = move |_| {
        ctx.controller().share_link();
    };

    view! {
        <header class="list-header">
            <div class="list-header-main">
                <Show
                    when=shows_list
                    fallback=move || view! {
                        <input
                            class="list-title draft"
                            placeholder=DEFAULT_LIST_TITLE
                            prop:value=move || store.title_input().get()
                            on:input=move |ev| ctx.controller().set_title_input(&event_target_value(&ev))
                        />
                    }
                >
                    <input
                        class="list-title"
                        prop:value=move || store.list().get().map(|list| list.title).unwrap_or_default()
                        on:input=move |ev| ctx.controller().edit_title(&event_target_value(&ev))
                        on:blur=move |ev| {
                            let title = event_target_value(&ev);
                            let controller = ctx.controller();
                            spawn_local(async move {
                                let _ = controller.rename_list(&title).await;
                            });
                        }
                    />
                </Show>
                <p class="list-subtitle">"みんなで作る、シェアできるウィッシュリスト"</p>
            </div>

            <div class="list-header-actions">
                <Show
                    when=shows_list
                    fallback=move || view! {
                        <button
                            class="primary-btn"
                            disabled=move || store.creating().get()
                            on:click=create_list
                        >
                            {move || if store.creating().get() { "作成中..." } else { "リストを作成" }}
                        </button>
                    }
                >
                    <button class="primary-btn" on:click=share_link>
                        "共有リンクをコピー"
                    </button>
                </Show>
            </div>
        </header>
    }
}
