use leptos::*;

/// Yes/No question step with Back and Next buttons
#[component]
pub fn ChoiceStep(
    #[prop(into)] value: Signal<bool>,
    on_select: impl Fn(bool) + Copy + 'static,
    on_back: impl Fn() + Copy + 'static,
    on_next: impl Fn() + Copy + 'static,
    next_label: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="choice-step">
            {children()}

            <div class="choice-options">
                <ChoiceOption label="Yes" selected=Signal::derive(move || value.get()) on_click=move || on_select(true) />
                <ChoiceOption label="No" selected=Signal::derive(move || !value.get()) on_click=move || on_select(false) />
            </div>

            <div class="form-actions">
                <button type="button" class="button secondary" on:click=move |_| on_back()>
                    "Back"
                </button>
                <button type="button" class="button primary" on:click=move |_| on_next()>
                    {next_label}
                </button>
            </div>
        </div>
    }
}

#[component]
fn ChoiceOption(
    label: &'static str,
    selected: Signal<bool>,
    on_click: impl Fn() + Copy + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if selected.get() { "choice-option selected" } else { "choice-option" }
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_click()
        >
            <span class="choice-radio">
                <Show when=move || selected.get()>
                    <span class="choice-radio-dot"></span>
                </Show>
            </span>
            <span>{label}</span>
        </button>
    }
}
