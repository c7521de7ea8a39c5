//! Browser Platform
//!
//! `window.location`, history, clipboard and `alert` for the controller.

use futures::future::LocalBoxFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wishlink_core::Platform;

pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn current_location(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default()
    }

    fn replace_location(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let replaced = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(href)));
        if let Err(e) = replaced {
            log::warn!("history.replaceState failed: {:?}", e);
        }
    }

    fn copy_to_clipboard(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        // Missing outside secure contexts; calling through it would throw
        let has_clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
            .unwrap_or(false);
        if !has_clipboard {
            log::warn!("Clipboard API unavailable; share link not copied");
            return;
        }
        let promise = navigator.clipboard().write_text(text);
        // The confirmation alert does not wait for this
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Clipboard write rejected: {:?}", e);
            }
        });
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}
