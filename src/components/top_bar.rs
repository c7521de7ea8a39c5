//! Top Bar Component
//!
//! Fixed header shown while a list is open.

use leptos::prelude::*;

#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <div class="top-bar-inner">
                <span class="top-bar-title">"WishLink"</span>
            </div>
        </header>
    }
}
