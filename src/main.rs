//! Bookable Storefront Entry Point

mod config;
mod context;
mod fetch;
mod hooks;
mod format;
mod components;
mod pages;
mod app;

use app::App;
use config::CONFIG;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Debug } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("[APP] Bookable storefront starting, API at {}", CONFIG.api_url);

    mount_to_body(App);
}
