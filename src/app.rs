//! WishLink Frontend App
//!
//! Wires the controller to the page: landing hero and creation card when no
//! list is shown, top bar plus the list card otherwise.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use std::rc::Rc;
use wishlink_core::TodoController;

use crate::browser::BrowserPlatform;
use crate::components::{Hero, ListCard, TopBar};
use crate::context::AppContext;
use crate::firebase::{Backend, BackendMode};
use crate::store::{store_apply_view, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let backend = Backend::connect();
    let controller = TodoController::new(backend.store, backend.identity, Rc::new(BrowserPlatform));
    controller.observe(move |view| store_apply_view(&store, view));

    let ctx = AppContext::new(controller.clone(), backend.mode);
    provide_context(ctx);

    // ?list=... decides between landing and list view
    controller.resolve_list_from_location();
    spawn_local(async move {
        controller.establish_session().await;
    });

    let popstate = window_event_listener(leptos::ev::popstate, move |_| {
        ctx.controller().resolve_list_from_location();
    });
    on_cleanup(move || {
        popstate.remove();
        ctx.teardown();
    });

    let shows_list = move || store.phase().get().shows_list();

    view! {
        <div class="app-shell">
            <Show when=shows_list>
                <TopBar />
            </Show>

            <main class="app-main">
                <div class="app-column">
                    <Show when=move || !shows_list()>
                        <Hero />
                    </Show>

                    <Show when=move || shows_list() || store.hero_done().get()>
                        <ListCard />
                    </Show>

                    <Show when=move || ctx.mode == BackendMode::Local>
                        <p class="local-mode-note">"ローカルモード: 変更は共有・保存されません"</p>
                    </Show>
                </div>
            </main>
        </div>
    }
}
