use std::str::FromStr;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const BASE_URL_KEY: &str = "API_BASE_URL";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

/// Runtime configuration, read once when the WASM module starts
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the declarations API, without a trailing slash.
    /// Empty means same origin.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: log::Level::Debug,
        }
    }
}

impl AppConfig {
    /// Load configuration from window.ENV, falling back to build-time values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| window_env(key).or_else(|| build_env(key)))
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup(BASE_URL_KEY)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let log_level = lookup(LOG_LEVEL_KEY)
            .and_then(|level| log::Level::from_str(level.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            log_level,
        }
    }
}

/// Values baked in by the build (e.g. `API_BASE_URL=... trunk build`)
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        BASE_URL_KEY => option_env!("API_BASE_URL"),
        LOG_LEVEL_KEY => option_env!("LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Read `window.ENV[key]`, populated by the deploy-time env.js
fn window_env(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        js_sys::Reflect::get(&env, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}
