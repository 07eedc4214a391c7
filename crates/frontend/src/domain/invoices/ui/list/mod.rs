use contracts::domain::invoice::InvoiceRow;
use contracts::enums::InvoiceStatus;
use contracts::query::{FilterValue, SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

use crate::shared::collection_query::{CollectionQuery, CollectionSource, QueryState};
use crate::shared::components::enum_filter::EnumFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{MoneyCell, SortableHeaderCell};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SOURCE: CollectionSource = CollectionSource {
    path: "invoices",
    search_fields: &["number"],
    error_fallback: "Failed to load invoices",
};

fn status_badge(status: InvoiceStatus) -> AnyView {
    let class = match status {
        InvoiceStatus::Issued => "badge badge--info",
        InvoiceStatus::Paid => "badge badge--success",
        InvoiceStatus::Overdue => "badge badge--error",
        InvoiceStatus::Void => "badge badge--neutral",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

#[component]
pub fn InvoicesList() -> impl IntoView {
    let query = CollectionQuery::<InvoiceRow>::with_state(
        SOURCE,
        QueryState::with_sort(SortSpec::single("issuedOn", SortDirection::Descending)),
    );

    let state = query.state();
    let items = query.items();
    let loading = query.loading();
    let is_filter_expanded = RwSignal::new(true);

    let sort = Signal::derive(move || state.get().sort);
    let search = Signal::derive(move || state.get().search);
    let status_selected = Signal::derive(move || state.get().filters.multi_values("status"));
    let active_filters_count = Signal::derive(move || state.get().filters.active_count());

    view! {
        <PageFrame page_id="invoices--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Invoices"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().pagination.total_items.to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| query.refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| is_filter_expanded.update(|e| *e = !*e)
                        >
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                if count > 0 {
                                    view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </div>

                        <div class="filter-panel-header__center">
                            <PaginationControls
                                page=Signal::derive(move || state.get().pagination.page)
                                total_pages=Signal::derive(move || state.get().pagination.total_pages())
                                total_count=Signal::derive(move || state.get().pagination.total_items)
                                page_size=Signal::derive(move || state.get().pagination.page_size)
                                on_page_change=Callback::new(move |page| query.set_page(page))
                                on_page_size_change=Callback::new(move |size| query.set_page_size(size))
                            />
                        </div>
                    </div>

                    <Show when=move || is_filter_expanded.get()>
                        <div class="filter-panel-content">
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <EnumFilter
                                    label="Status"
                                    options={InvoiceStatus::all().iter().map(|s| (s.key(), s.label())).collect::<Vec<_>>()}
                                    selected=status_selected
                                    on_change=Callback::new(move |values: Vec<String>| {
                                        query.set_filter("status", FilterValue::Multi(values));
                                    })
                                />
                                <SearchInput
                                    value=search
                                    on_change=Callback::new(move |text: String| query.set_search(text))
                                    placeholder="Search invoice number...".to_string()
                                />
                            </Flex>
                        </div>
                    </Show>
                </div>

                <Show when=move || loading.get()>
                    <div class="table-loading">"Loading..."</div>
                </Show>

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <SortableHeaderCell
                                    field="number"
                                    label="Number"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Counterparty"</th>
                                <th>"Status"</th>
                                <SortableHeaderCell
                                    field="issuedOn"
                                    label="Issued"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <SortableHeaderCell
                                    field="dueOn"
                                    label="Due"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <SortableHeaderCell
                                    field="total"
                                    label="Total"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|row| row.id.to_string()
                                children=move |row| {
                                    view! {
                                        <tr>
                                            <td>{row.number.clone()}</td>
                                            <td class="table__cell-truncate">{row.counterparty_name.clone()}</td>
                                            <td>{status_badge(row.status)}</td>
                                            <td>{format_date(&row.issued_on)}</td>
                                            <td>{format_date(&row.due_on)}</td>
                                            <MoneyCell
                                                amount=row.total
                                                currency=row.currency.clone()
                                                color_by_sign=true
                                            />
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
