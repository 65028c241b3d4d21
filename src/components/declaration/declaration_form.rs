use leptos::*;

use crate::api::ApiClient;
use crate::state::wizard::SUBMIT_SUCCESS_MESSAGE;
use crate::state::{Phase, Step, Wizard, WizardAction};

use super::choice_step::ChoiceStep;
use super::details_step::DetailsStep;
use super::progress_bar::ProgressBar;
use super::review_step::ReviewStep;

/// Top-level panel shown inside the declaration card
#[derive(Debug, Clone, PartialEq)]
enum Screen {
    Form,
    Success,
    Failure(String),
}

/// Declaration wizard page
#[component]
pub fn DeclarationForm() -> impl IntoView {
    let client = store_value(expect_context::<ApiClient>());
    let wizard = create_rw_signal(Wizard::new());

    // Memos keep the panels from re-rendering on every keystroke
    let screen = create_memo(move |_| match wizard.with(|w| w.phase().clone()) {
        Phase::Editing | Phase::Submitting => Screen::Form,
        Phase::Succeeded => Screen::Success,
        Phase::Failed(message) => Screen::Failure(message),
    });
    let step = create_memo(move |_| wizard.with(Wizard::step));

    let dispatch = move |action: WizardAction| {
        wizard.update(|w| {
            w.dispatch(action);
        });
    };

    let submit = move || {
        let Some(request) = wizard
            .try_update(|w| w.dispatch(WizardAction::Submit))
            .flatten()
        else {
            return;
        };

        log::debug!("Submitting declaration");
        spawn_local(async move {
            let outcome = match client.get_value().create_declaration(&request).await {
                Ok(created) => {
                    log::info!("Declaration {} submitted", created.id);
                    WizardAction::SubmitSucceeded
                }
                Err(e) => WizardAction::SubmitFailed(e.to_string()),
            };
            dispatch(outcome);
        });
    };

    view! {
        <div class="declaration-page">
            <div class="card">
                <h2 class="card-title">"Submit New Declaration"</h2>

                {move || match screen.get() {
                    Screen::Success => view! {
                        <div class="submit-success">
                            <p>{SUBMIT_SUCCESS_MESSAGE}</p>
                            <button
                                type="button"
                                class="button primary"
                                on:click=move |_| dispatch(WizardAction::StartAnother)
                            >
                                "Submit Another Declaration"
                            </button>
                        </div>
                    }.into_view(),
                    Screen::Failure(message) => view! {
                        <div class="error-banner">
                            <strong>"Oops! Something went wrong."</strong>
                            <p>{message}</p>
                        </div>
                        <div class="retry">
                            <button
                                type="button"
                                class="button primary"
                                on:click=move |_| dispatch(WizardAction::Retry)
                            >
                                "Try Again"
                            </button>
                        </div>
                    }.into_view(),
                    Screen::Form => view! {
                        <form on:submit=|ev: ev::SubmitEvent| ev.prevent_default()>
                            <ProgressBar step=step />
                            {move || match step.get() {
                                Step::Details => view! { <DetailsStep wizard=wizard /> }.into_view(),
                                Step::Symptoms => view! {
                                    <ChoiceStep
                                        value=Signal::derive(move || wizard.with(|w| w.draft().has_symptoms))
                                        on_select=move |value| dispatch(WizardAction::SetHasSymptoms(value))
                                        on_back=move || dispatch(WizardAction::Back)
                                        on_next=move || dispatch(WizardAction::Next)
                                        next_label="Next"
                                    >
                                        <p class="question">
                                            "Do you have any of the following symptoms now or within the last 14 days (even if your symptoms are mild):"
                                        </p>
                                        <p class="question">
                                            "Cough, smell/taste impairment, fever, breathing difficulties, body aches, headaches, fatigue, sore throat, diarrhea, runny nose?"
                                        </p>
                                    </ChoiceStep>
                                }.into_view(),
                                Step::Contact => view! {
                                    <ChoiceStep
                                        value=Signal::derive(move || wizard.with(|w| w.draft().contact_with_covid))
                                        on_select=move |value| dispatch(WizardAction::SetContactWithCovid(value))
                                        on_back=move || dispatch(WizardAction::Back)
                                        on_next=move || dispatch(WizardAction::Next)
                                        next_label="Review"
                                    >
                                        <p class="question">
                                            "Have you been in contact with anyone suspected or diagnosed with Covid-19 within the last 14 days?"
                                        </p>
                                    </ChoiceStep>
                                }.into_view(),
                                Step::Review => view! {
                                    <ReviewStep
                                        wizard=wizard
                                        on_back=move || dispatch(WizardAction::Back)
                                        on_submit=submit
                                    />
                                }.into_view(),
                            }}
                        </form>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}
