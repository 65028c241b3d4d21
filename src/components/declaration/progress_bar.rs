use leptos::*;

use crate::state::Step;

/// Four numbered dots joined by connectors, filled up to the current step
#[component]
pub fn ProgressBar(#[prop(into)] step: Signal<Step>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            {Step::ALL
                .into_iter()
                .map(|s| {
                    let reached = move || step.get() >= s;
                    let connector = if s == Step::Details {
                        None
                    } else {
                        Some(view! {
                            <div class=move || if reached() { "progress-connector reached" } else { "progress-connector" }></div>
                        })
                    };
                    view! {
                        {connector}
                        <div class=move || if reached() { "progress-dot reached" } else { "progress-dot" }>
                            {s.number()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
