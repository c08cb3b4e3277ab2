//! KPS Portal Frontend Entry Point

mod models;
mod error;
mod config;
mod catalog;
mod api;
mod debounce;
mod wizard;
mod history;
mod forms;
mod context;
mod store;
mod notify;
mod components;
mod app;
mod mobile;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
