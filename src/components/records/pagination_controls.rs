use leptos::*;

use crate::state::{page_window, PageItem, PaginationState};

/// Range summary plus Previous / page numbers / Next
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<PaginationState>,
    on_page: impl Fn(u32) + Copy + 'static,
) -> impl IntoView {
    let current = move || pagination.get().page;
    let go_previous = move |_: ev::MouseEvent| on_page(current().saturating_sub(1));
    let go_next = move |_: ev::MouseEvent| on_page(current() + 1);

    view! {
        <div class="pagination">
            <div class="pagination-full">
                <p class="pagination-summary">{move || pagination.get().range_summary()}</p>
                <nav class="pagination-nav" aria-label="Pagination">
                    <button
                        class="page-button"
                        aria-label="Previous"
                        disabled=move || !pagination.get().has_previous()
                        on:click=go_previous
                    >
                        "‹"
                    </button>
                    {move || {
                        let state = pagination.get();
                        page_window(state.page, state.total_pages())
                            .into_iter()
                            .map(move |item| match item {
                                PageItem::Page(n) => view! {
                                    <button
                                        class=if n == state.page { "page-button current" } else { "page-button" }
                                        aria-current=if n == state.page { Some("page") } else { None }
                                        on:click=move |_| on_page(n)
                                    >
                                        {n}
                                    </button>
                                }.into_view(),
                                PageItem::Ellipsis => view! {
                                    <span class="page-ellipsis">"..."</span>
                                }.into_view(),
                            })
                            .collect_view()
                    }}
                    <button
                        class="page-button"
                        aria-label="Next"
                        disabled=move || !pagination.get().has_next()
                        on:click=go_next
                    >
                        "›"
                    </button>
                </nav>
            </div>

            <div class="pagination-compact">
                <button
                    class="page-button"
                    disabled=move || !pagination.get().has_previous()
                    on:click=go_previous
                >
                    "Previous"
                </button>
                <span class="page-indicator">
                    {move || {
                        let state = pagination.get();
                        format!("Page {} of {}", state.page, state.total_pages())
                    }}
                </span>
                <button
                    class="page-button"
                    disabled=move || !pagination.get().has_next()
                    on:click=go_next
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
