use leptos::*;
use wasm_bindgen::prelude::*;

pub mod api;
mod app;
mod components;
pub mod config;
pub mod format;
pub mod models;
pub mod state;

use crate::config::AppConfig;

/// WASM entry point - called when the WASM module loads
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();

    _ = console_log::init_with_level(config.log_level);

    log::info!(
        "Starting HealthCheck (api: {})",
        if config.api_base_url.is_empty() { "same origin" } else { config.api_base_url.as_str() }
    );

    mount_to_body(move || view! { <app::App config=config /> });
}
