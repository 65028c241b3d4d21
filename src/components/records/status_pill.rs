use leptos::*;

use crate::format::yes_no;

/// Yes/No badge; "Yes" is highlighted as the case that needs attention
#[component]
pub fn StatusPill(value: bool) -> impl IntoView {
    let class = if value { "status-pill alert" } else { "status-pill ok" };

    view! { <span class=class>{yes_no(value)}</span> }
}
