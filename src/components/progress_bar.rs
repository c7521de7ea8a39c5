//! Progress Bar Component
//!
//! Task counter and completion bar.

use leptos::prelude::*;
use wishlink_core::Progress;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProgressBar() -> impl IntoView {
    let store = use_app_store();
    let progress = move || Progress::of(&store.tasks().get());

    view! {
        <div class="progress-row">
            <span class="progress-summary">{move || progress().summary()}</span>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", progress().percent())
                ></div>
            </div>
        </div>
    }
}
