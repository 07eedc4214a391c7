use contracts::query::PAGE_SIZES;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Reusable pagination strip: first/prev/info/next/last plus the
/// page-size selector. Pages are 1-based, matching the wire format.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(into)]
    page_size: Signal<u32>,

    on_page_change: Callback<u32>,

    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get();
                    if current > 1 {
                        on_page_change.run(current - 1);
                    }
                }
                disabled=move || page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let current = page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} ({})", current, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let current = page.get();
                    if current < total_pages.get() {
                        on_page_change.run(current + 1);
                    }
                }
                disabled=move || page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=move || page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev).parse().unwrap_or(20);
                    on_page_size_change.run(value);
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZES.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
