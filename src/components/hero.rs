//! Landing Hero Component
//!
//! Fades the app name in; the creation card waits for it to finish.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, AppStateStoreFields};

/// Matches the `hero-fade-in` animation duration in styles.css
const HERO_ANIMATION_MS: u32 = 700;

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_app_store();

    if !store.hero_done().get_untracked() {
        spawn_local(async move {
            TimeoutFuture::new(HERO_ANIMATION_MS).await;
            *store.hero_done().write() = true;
        });
    }

    view! {
        <h1 class="hero-title">"WishLink"</h1>
    }
}
