//! Declaration wizard state machine
//!
//! `Wizard` is a plain value driven by [`WizardAction`]s, so every
//! transition can be exercised without a browser. The view keeps one
//! `Wizard` in an `RwSignal` and performs the network call whenever
//! [`Wizard::dispatch`] hands back a request.

use super::draft::{parse_temperature, DraftDeclaration};
use crate::models::CreateDeclarationRequest;

pub const MIN_TEMPERATURE: f64 = 35.0;
pub const MAX_TEMPERATURE: f64 = 42.0;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Declaration submitted successfully.";

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Details = 1,
    Symptoms = 2,
    Contact = 3,
    Review = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Details, Step::Symptoms, Step::Contact, Step::Review];

    pub fn number(self) -> u8 {
        self as u8
    }

    fn next(self) -> Option<Self> {
        match self {
            Step::Details => Some(Step::Symptoms),
            Step::Symptoms => Some(Step::Contact),
            Step::Contact => Some(Step::Review),
            Step::Review => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Step::Details => None,
            Step::Symptoms => Some(Step::Details),
            Step::Contact => Some(Step::Symptoms),
            Step::Review => Some(Step::Contact),
        }
    }
}

/// Where the wizard is relative to the submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Per-field validation messages for the details step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub temperature: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.temperature.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    EditName(String),
    EditTemperature(String),
    SetHasSymptoms(bool),
    SetContactWithCovid(bool),
    Next,
    Back,
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
    Retry,
    StartAnother,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: Step,
    phase: Phase,
    draft: DraftDeclaration,
    errors: FieldErrors,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Details,
            phase: Phase::Editing,
            draft: DraftDeclaration::default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn draft(&self) -> &DraftDeclaration {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Apply an action.
    ///
    /// Returns the request body when the action starts a submission; the
    /// caller sends it and reports back with `SubmitSucceeded` or
    /// `SubmitFailed`. Actions that make no sense in the current phase or
    /// step are ignored.
    pub fn dispatch(&mut self, action: WizardAction) -> Option<CreateDeclarationRequest> {
        let editing = self.phase == Phase::Editing;
        match action {
            WizardAction::EditName(name) if editing => self.draft.name = name,
            WizardAction::EditTemperature(input) if editing => {
                self.draft.set_temperature_input(&input);
            }
            WizardAction::SetHasSymptoms(value) if editing => self.draft.has_symptoms = value,
            WizardAction::SetContactWithCovid(value) if editing => {
                self.draft.contact_with_covid = value;
            }
            WizardAction::Next if editing => self.next(),
            WizardAction::Back if editing => {
                if let Some(previous) = self.step.previous() {
                    self.step = previous;
                }
            }
            WizardAction::Submit if editing && self.step == Step::Review => {
                self.phase = Phase::Submitting;
                return Some(self.draft.to_request());
            }
            WizardAction::SubmitSucceeded if self.is_submitting() => {
                self.draft = DraftDeclaration::default();
                self.errors = FieldErrors::default();
                self.step = Step::Details;
                self.phase = Phase::Succeeded;
            }
            WizardAction::SubmitFailed(message) if self.is_submitting() => {
                self.phase = Phase::Failed(message);
            }
            WizardAction::Retry if matches!(self.phase, Phase::Failed(_)) => {
                self.phase = Phase::Editing;
                self.step = Step::Review;
            }
            WizardAction::StartAnother if self.phase == Phase::Succeeded => {
                self.phase = Phase::Editing;
                self.step = Step::Details;
            }
            _ => {}
        }
        None
    }

    fn next(&mut self) {
        if self.step == Step::Details {
            self.errors = validate_details(&self.draft);
            if !self.errors.is_empty() {
                return;
            }
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }
}

/// Validate the name and temperature entered on the first step
pub fn validate_details(draft: &DraftDeclaration) -> FieldErrors {
    let name = if draft.name.trim().is_empty() {
        Some("Name is required".to_string())
    } else {
        None
    };

    let temperature = if draft.temperature_raw.is_empty() {
        Some("Temperature is required".to_string())
    } else {
        match parse_temperature(&draft.temperature_raw) {
            None => Some("Temperature must be a valid number".to_string()),
            Some(t) if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&t) => {
                Some("Temperature must be between 35°C and 42°C".to_string())
            }
            Some(_) => None,
        }
    };

    FieldErrors { name, temperature }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.dispatch(WizardAction::EditName("Ada Lovelace".to_string()));
        wizard.dispatch(WizardAction::EditTemperature("36.5".to_string()));
        wizard
    }

    fn wizard_at_review() -> Wizard {
        let mut wizard = filled_wizard();
        wizard.dispatch(WizardAction::Next);
        wizard.dispatch(WizardAction::SetHasSymptoms(true));
        wizard.dispatch(WizardAction::Next);
        wizard.dispatch(WizardAction::Next);
        assert_eq!(wizard.step(), Step::Review);
        wizard
    }

    #[test]
    fn test_next_blocked_on_empty_details() {
        let mut wizard = Wizard::new();
        wizard.dispatch(WizardAction::Next);

        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.errors().name.as_deref(), Some("Name is required"));
        assert_eq!(
            wizard.errors().temperature.as_deref(),
            Some("Temperature is required")
        );
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let mut wizard = Wizard::new();
        wizard.dispatch(WizardAction::EditName("   ".to_string()));
        wizard.dispatch(WizardAction::EditTemperature("37".to_string()));
        wizard.dispatch(WizardAction::Next);

        assert_eq!(wizard.step(), Step::Details);
        assert!(wizard.errors().name.is_some());
        assert!(wizard.errors().temperature.is_none());
    }

    #[test]
    fn test_temperature_range_is_inclusive() {
        for (raw, ok) in [
            ("34.9", false),
            ("35", true),
            ("36.6", true),
            ("42", true),
            ("42.0", true),
            ("42.1", false),
            ("100", false),
        ] {
            let draft = DraftDeclaration {
                name: "Ada".to_string(),
                temperature_raw: raw.to_string(),
                ..Default::default()
            };
            let errors = validate_details(&draft);
            assert_eq!(errors.is_empty(), ok, "temperature {raw}");
            if !ok {
                assert_eq!(
                    errors.temperature.as_deref(),
                    Some("Temperature must be between 35°C and 42°C")
                );
            }
        }
    }

    #[test]
    fn test_lone_decimal_point_is_not_a_number() {
        let mut wizard = Wizard::new();
        wizard.dispatch(WizardAction::EditName("Ada".to_string()));
        wizard.dispatch(WizardAction::EditTemperature(".".to_string()));
        wizard.dispatch(WizardAction::Next);

        assert_eq!(
            wizard.errors().temperature.as_deref(),
            Some("Temperature must be a valid number")
        );
    }

    #[test]
    fn test_valid_details_advance_and_clear_errors() {
        let mut wizard = Wizard::new();
        wizard.dispatch(WizardAction::Next);
        assert!(!wizard.errors().is_empty());

        wizard.dispatch(WizardAction::EditName("Ada".to_string()));
        wizard.dispatch(WizardAction::EditTemperature("36.5".to_string()));
        wizard.dispatch(WizardAction::Next);

        assert_eq!(wizard.step(), Step::Symptoms);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_rejected_keystroke_keeps_draft() {
        let mut wizard = filled_wizard();
        wizard.dispatch(WizardAction::EditTemperature("36.55".to_string()));

        assert_eq!(wizard.draft().temperature_raw, "36.5");
        assert_eq!(wizard.draft().temperature, 36.5);
    }

    #[test]
    fn test_back_preserves_fields() {
        let mut wizard = wizard_at_review();
        wizard.dispatch(WizardAction::Back);
        wizard.dispatch(WizardAction::Back);
        wizard.dispatch(WizardAction::Back);

        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.draft().name, "Ada Lovelace");
        assert_eq!(wizard.draft().temperature_raw, "36.5");
        assert!(wizard.draft().has_symptoms);

        wizard.dispatch(WizardAction::Back);
        assert_eq!(wizard.step(), Step::Details);
    }

    #[test]
    fn test_submit_only_from_review() {
        let mut wizard = filled_wizard();
        assert!(wizard.dispatch(WizardAction::Submit).is_none());
        assert_eq!(wizard.phase(), &Phase::Editing);

        let mut wizard = wizard_at_review();
        wizard.dispatch(WizardAction::Next);
        assert_eq!(wizard.step(), Step::Review);

        let request = wizard.dispatch(WizardAction::Submit).unwrap();
        assert_eq!(request.name, "Ada Lovelace");
        assert_eq!(request.temperature, 36.5);
        assert!(request.has_symptoms);
        assert!(!request.contact_with_covid);
        assert!(wizard.is_submitting());
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let mut wizard = wizard_at_review();
        assert!(wizard.dispatch(WizardAction::Submit).is_some());
        assert!(wizard.dispatch(WizardAction::Submit).is_none());
        wizard.dispatch(WizardAction::EditName("Changed".to_string()));
        wizard.dispatch(WizardAction::Back);

        assert_eq!(wizard.draft().name, "Ada Lovelace");
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn test_submit_success_resets_draft() {
        let mut wizard = wizard_at_review();
        wizard.dispatch(WizardAction::Submit);
        wizard.dispatch(WizardAction::SubmitSucceeded);

        assert_eq!(wizard.phase(), &Phase::Succeeded);
        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.draft(), &DraftDeclaration::default());

        wizard.dispatch(WizardAction::StartAnother);
        assert_eq!(wizard.phase(), &Phase::Editing);
        assert_eq!(wizard.step(), Step::Details);
    }

    #[test]
    fn test_submit_failure_then_retry_returns_to_review() {
        let mut wizard = wizard_at_review();
        let before = wizard.draft().clone();
        wizard.dispatch(WizardAction::Submit);
        wizard.dispatch(WizardAction::SubmitFailed("Server unavailable".to_string()));

        assert_eq!(
            wizard.phase(),
            &Phase::Failed("Server unavailable".to_string())
        );
        assert_eq!(wizard.draft(), &before);

        wizard.dispatch(WizardAction::Retry);
        assert_eq!(wizard.phase(), &Phase::Editing);
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn test_outcome_without_submission_is_ignored() {
        let mut wizard = filled_wizard();
        wizard.dispatch(WizardAction::SubmitSucceeded);
        wizard.dispatch(WizardAction::SubmitFailed("late".to_string()));

        assert_eq!(wizard.phase(), &Phase::Editing);
        assert_eq!(wizard.draft().name, "Ada Lovelace");
    }
}
