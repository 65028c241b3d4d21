//! Display helpers for declaration values

/// Temperature with its unit, e.g. `36.5°C`
pub fn temperature_label(temperature: f64) -> String {
    format!("{}°C", temperature)
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Submission timestamp as locale date followed by locale time.
/// Timestamps that cannot be parsed are returned as-is.
pub fn submission_date_label(timestamp: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
        if date.get_time().is_nan() {
            return timestamp.to_string();
        }
        format!(
            "{} {}",
            String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)),
            String::from(date.to_locale_time_string("default")),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        local_date_label(timestamp)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn local_date_label(timestamp: &str) -> String {
    use chrono::{DateTime, Local};

    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%-m/%-d/%Y %-I:%M:%S %p")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}
