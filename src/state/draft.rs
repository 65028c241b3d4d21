use std::sync::OnceLock;

use regex::Regex;

use crate::models::CreateDeclarationRequest;

/// Partial or complete number with at most one decimal place
const TEMPERATURE_PATTERN: &str = r"^([0-9]*\.?[0-9]?)?$";

fn temperature_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(TEMPERATURE_PATTERN).expect("temperature pattern is valid"))
}

/// Declaration being filled in by the wizard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftDeclaration {
    pub name: String,
    /// Exactly what the user typed into the temperature field
    pub temperature_raw: String,
    /// Parsed `temperature_raw`, 0 when empty or unparseable
    pub temperature: f64,
    pub has_symptoms: bool,
    pub contact_with_covid: bool,
}

impl DraftDeclaration {
    /// Apply a temperature keystroke.
    ///
    /// Text outside the accepted pattern is rejected and the previous raw
    /// value kept. Returns whether the input was accepted.
    pub fn set_temperature_input(&mut self, input: &str) -> bool {
        if !is_accepted_temperature_input(input) {
            return false;
        }
        self.temperature_raw = input.to_string();
        self.temperature = parse_temperature(input).unwrap_or(0.0);
        true
    }

    pub fn to_request(&self) -> CreateDeclarationRequest {
        CreateDeclarationRequest {
            name: self.name.clone(),
            temperature: self.temperature,
            has_symptoms: self.has_symptoms,
            contact_with_covid: self.contact_with_covid,
        }
    }
}

pub fn is_accepted_temperature_input(input: &str) -> bool {
    temperature_pattern().is_match(input)
}

pub fn parse_temperature(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok().filter(|t| t.is_finite())
}
