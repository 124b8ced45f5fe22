//! Field Task Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod form;
mod models;
mod store;
mod submit;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("TaskForm", log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
