//! JS Bridge Bindings
//!
//! `public/firebase-bridge.js` wraps the Firebase compat SDK in a handful of
//! functions on `window.wishlinkFirebase`; these are their Rust signatures.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Initialize the SDK app unless it already exists
    #[wasm_bindgen(catch, js_namespace = ["window", "wishlinkFirebase"], js_name = init)]
    pub fn init(config: JsValue) -> Result<(), JsValue>;

    /// Resolves with the uid of the current or a new anonymous user
    #[wasm_bindgen(catch, js_namespace = ["window", "wishlinkFirebase"], js_name = ensureAnonymousSession)]
    pub async fn ensure_anonymous_session() -> Result<JsValue, JsValue>;

    /// Resolves with the new document id; adds the `createdAt` server timestamp
    #[wasm_bindgen(catch, js_namespace = ["window", "wishlinkFirebase"], js_name = addDocument)]
    pub async fn add_document(collection: &str, data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "wishlinkFirebase"], js_name = updateDocument)]
    pub async fn update_document(collection: &str, id: &str, data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["window", "wishlinkFirebase"], js_name = deleteDocument)]
    pub async fn delete_document(collection: &str, id: &str) -> Result<JsValue, JsValue>;

    /// Returns the unsubscribe function
    #[wasm_bindgen(catch, js_namespace = ["window", "wishlinkFirebase"], js_name = watchDocument)]
    pub fn watch_document(
        collection: &str,
        id: &str,
        on_next: &Closure<dyn FnMut(JsValue)>,
        on_error: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;

    /// `field == value`, ordered by `order_by` ascending. Returns the
    /// unsubscribe function.
    #[wasm_bindgen(catch, js_namespace = ["window", "wishlinkFirebase"], js_name = watchQuery)]
    pub fn watch_query(
        collection: &str,
        field: &str,
        value: &str,
        order_by: &str,
        on_next: &Closure<dyn FnMut(JsValue)>,
        on_error: &Closure<dyn FnMut(JsValue)>,
    ) -> Result<js_sys::Function, JsValue>;
}
