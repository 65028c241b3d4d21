use leptos::*;

use crate::format::{submission_date_label, temperature_label};
use crate::models::Declaration;

use super::status_pill::StatusPill;

#[component]
pub fn RecordsTable(#[prop(into)] declarations: Signal<Vec<Declaration>>) -> impl IntoView {
    view! {
        <div class="table-scroll">
            <table class="records-table">
                <thead>
                    <tr>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Temperature"</th>
                        <th scope="col">"Has Symptoms"</th>
                        <th scope="col">"Contact with Covid"</th>
                        <th scope="col">"Submission Date"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || declarations.get()
                        key=|declaration| declaration.id.clone()
                        children=move |declaration| view! { <DeclarationRow declaration=declaration /> }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn DeclarationRow(declaration: Declaration) -> impl IntoView {
    view! {
        <tr>
            <td class="cell-name">{declaration.name}</td>
            <td>{temperature_label(declaration.temperature)}</td>
            <td><StatusPill value=declaration.has_symptoms /></td>
            <td><StatusPill value=declaration.contact_with_covid /></td>
            <td>{submission_date_label(&declaration.submission_date)}</td>
        </tr>
    }
}
