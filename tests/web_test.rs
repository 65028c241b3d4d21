// Browser-only checks; run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use healthcheck_web_leptos::config::AppConfig;
use healthcheck_web_leptos::format::submission_date_label;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_locale_date_label_in_browser() {
    let label = submission_date_label("2024-03-01T12:30:45Z");
    assert_ne!(label, "2024-03-01T12:30:45Z");
    assert!(label.contains("2024"));
}

#[wasm_bindgen_test]
fn test_invalid_date_shown_verbatim_in_browser() {
    assert_eq!(submission_date_label("not a date"), "not a date");
}

#[wasm_bindgen_test]
fn test_config_without_window_env() {
    let config = AppConfig::from_env();
    assert!(!config.api_base_url.ends_with('/'));
}
