//! List Card Component
//!
//! The white card: header always, task section and hints once a list is open.

use leptos::prelude::*;

use crate::components::{Hints, ListHeader, NewTaskForm, ProgressBar, TaskList};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListCard() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="list-card">
            <ListHeader />

            <Show when=move || store.phase().get().shows_list()>
                <section class="task-section">
                    <NewTaskForm />
                    <ProgressBar />
                    <TaskList />
                </section>
                <Hints />
            </Show>
        </div>
    }
}
