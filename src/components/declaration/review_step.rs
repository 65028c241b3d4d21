use leptos::*;

use crate::format::{temperature_label, yes_no};
use crate::state::Wizard;

/// Step 4: summary of the draft before it is submitted
#[component]
pub fn ReviewStep(
    wizard: RwSignal<Wizard>,
    on_back: impl Fn() + Copy + 'static,
    on_submit: impl Fn() + Copy + 'static,
) -> impl IntoView {
    let draft = move || wizard.with(|w| w.draft().clone());
    let submitting = move || wizard.with(Wizard::is_submitting);

    view! {
        <div class="review-step">
            <h3>"Review Your Declaration"</h3>
            <p class="review-hint">
                "Please ensure all information is accurate before submitting the form. Select \"Submit Declaration\" if all information is correct."
            </p>

            <dl class="review-summary">
                <dt>"Full Name"</dt>
                <dd>{move || draft().name}</dd>
                <dt>"Body Temperature"</dt>
                <dd>{move || temperature_label(draft().temperature)}</dd>
                <dt>"Do you have any symptoms?"</dt>
                <dd>{move || yes_no(draft().has_symptoms)}</dd>
                <dt>"Contact with Covid-19 case?"</dt>
                <dd>{move || yes_no(draft().contact_with_covid)}</dd>
            </dl>

            <div class="form-actions">
                <button
                    type="button"
                    class="button secondary"
                    disabled=submitting
                    on:click=move |_| on_back()
                >
                    "Back"
                </button>
                <button
                    type="button"
                    class="button primary"
                    disabled=submitting
                    on:click=move |_| on_submit()
                >
                    {move || if submitting() { "Submitting..." } else { "Submit Declaration" }}
                </button>
            </div>
        </div>
    }
}
