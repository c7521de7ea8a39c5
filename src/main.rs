//! WishLink Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod firebase;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = web_logger::init_logger("WishLink", log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("Logger init failed: {e}").into());
    }
    mount_to_body(App);
}
