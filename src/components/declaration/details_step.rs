use leptos::*;

use crate::state::{Wizard, WizardAction};

/// Step 1: name and body temperature
#[component]
pub fn DetailsStep(wizard: RwSignal<Wizard>) -> impl IntoView {
    let name_error = create_memo(move |_| wizard.with(|w| w.errors().name.clone()));
    let temperature_error = create_memo(move |_| wizard.with(|w| w.errors().temperature.clone()));

    let on_name_input = move |ev: ev::Event| {
        let name = event_target_value(&ev);
        wizard.update(|w| {
            w.dispatch(WizardAction::EditName(name));
        });
    };

    let on_temperature_input = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        wizard.update(|w| {
            w.dispatch(WizardAction::EditTemperature(input.value()));
        });

        // Rejected keystrokes must disappear from the field as well
        let accepted = wizard.with_untracked(|w| w.draft().temperature_raw.clone());
        if input.value() != accepted {
            input.set_value(&accepted);
        }
    };

    view! {
        <div class="form-field">
            <label for="name" class="form-label">"Full Name"</label>
            <input
                type="text"
                id="name"
                name="name"
                class=move || if name_error.get().is_some() { "form-input invalid" } else { "form-input" }
                placeholder="Enter your full name"
                prop:value=move || wizard.with(|w| w.draft().name.clone())
                on:input=on_name_input
            />
            {move || name_error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>

        <div class="form-field">
            <label for="temperature" class="form-label">"Body Temperature (°C)"</label>
            <input
                type="text"
                id="temperature"
                name="temperature"
                inputmode="decimal"
                class=move || if temperature_error.get().is_some() { "form-input invalid" } else { "form-input" }
                placeholder="Enter body temperature (e.g., 36.5)"
                prop:value=move || wizard.with(|w| w.draft().temperature_raw.clone())
                on:input=on_temperature_input
            />
            {move || temperature_error.get().map(|message| view! { <p class="field-error">{message}</p> })}
        </div>

        <div class="form-actions end">
            <button
                type="button"
                class="button primary"
                on:click=move |_| wizard.update(|w| {
                    w.dispatch(WizardAction::Next);
                })
            >
                "Next"
            </button>
        </div>
    }
}
