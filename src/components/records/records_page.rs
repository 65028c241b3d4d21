use leptos::*;

use crate::api::ApiClient;
use crate::state::records::PAGE_SIZES;
use crate::state::RecordsState;

use super::pagination_controls::PaginationControls;
use super::records_table::RecordsTable;

/// Records page: one page of submitted declarations at a time
#[component]
pub fn RecordsPage() -> impl IntoView {
    let client = store_value(expect_context::<ApiClient>());
    let records = create_rw_signal(RecordsState::default());

    let load = move || {
        let Some(request) = records.try_update(RecordsState::begin_load) else {
            return;
        };
        log::debug!(
            "Loading declarations page {} (limit {})",
            request.page,
            request.limit
        );

        spawn_local(async move {
            let result = client
                .get_value()
                .fetch_declarations(request.page, request.limit)
                .await;
            records.update(|r| {
                if !r.finish_load(request, result) {
                    log::debug!("Dropped stale response for page {}", request.page);
                }
            });
        });
    };

    // Reload on mount and whenever the page or page size changes
    let query = create_memo(move |_| records.with(RecordsState::query));
    create_effect(move |_| {
        let (page, limit) = query.get();
        log::trace!("Records query changed: page={}, limit={}", page, limit);
        load();
    });

    let pagination = create_memo(move |_| records.with(RecordsState::pagination));
    let loading = create_memo(move |_| records.with(RecordsState::is_loading));
    let error = create_memo(move |_| records.with(|r| r.error().map(str::to_string)));
    let declarations = create_memo(move |_| records.with(|r| r.declarations().to_vec()));

    let on_page = move |page: u32| {
        records.update(|r| {
            r.go_to_page(page);
        });
    };

    let on_page_size = move |ev: ev::Event| {
        let select = event_target::<web_sys::HtmlSelectElement>(&ev);
        if let Ok(limit) = select.value().parse::<u32>() {
            records.update(|r| {
                r.set_limit(limit);
            });
        }
    };

    view! {
        <div class="records-page">
            <div class="card">
                <div class="records-header">
                    <h2>"Declaration Records"</h2>
                    <div class="records-actions">
                        <label class="page-size">
                            "Per page"
                            <select
                                prop:value=move || pagination.get().limit.to_string()
                                on:change=on_page_size
                            >
                                {PAGE_SIZES
                                    .into_iter()
                                    .map(|size| view! { <option value=size.to_string()>{size}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <button class="refresh-button" aria-label="Refresh" on:click=move |_| load()>
                            "Refresh"
                        </button>
                    </div>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="error-banner">
                        <p>{message}</p>
                    </div>
                })}

                {move || {
                    if loading.get() {
                        view! { <div class="loading">"Loading declarations..."</div> }.into_view()
                    } else if declarations.with(|d| d.is_empty()) {
                        view! { <div class="no-data">"No declarations found"</div> }.into_view()
                    } else {
                        view! {
                            <RecordsTable declarations=declarations />
                            <Show when=move || { pagination.get().total_pages() > 1 }>
                                <PaginationControls pagination=pagination on_page=on_page />
                            </Show>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}
