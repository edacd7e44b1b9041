//! Structure Console Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod load_state;
mod models;
mod palette;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { tracing::Level::DEBUG } else { tracing::Level::INFO };
    if let Err(e) = console_logger::init_logger("StructureConsole", level) {
        web_sys::console::error_1(&e.to_string().into());
    }

    mount_to_body(App);
}
