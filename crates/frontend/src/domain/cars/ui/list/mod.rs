use contracts::domain::car::CarRow;
use contracts::enums::CarStatus;
use contracts::query::{FilterValue, SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

use crate::shared::collection_query::{CollectionQuery, CollectionSource, QueryState};
use crate::shared::components::enum_filter::EnumFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SOURCE: CollectionSource = CollectionSource {
    path: "cars",
    search_fields: &["plateNumber", "model"],
    error_fallback: "Failed to load cars",
};

fn status_badge(status: CarStatus) -> AnyView {
    let class = match status {
        CarStatus::Available => "badge badge--success",
        CarStatus::Rented => "badge badge--info",
        CarStatus::Maintenance => "badge badge--warning",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

#[component]
pub fn CarsList() -> impl IntoView {
    let query = CollectionQuery::<CarRow>::with_state(
        SOURCE,
        QueryState::with_sort(SortSpec::single("plateNumber", SortDirection::Ascending)),
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
        <PageFrame page_id="cars--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Cars"</h1>
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
                                    options={CarStatus::all().iter().map(|s| (s.key(), s.label())).collect::<Vec<_>>()}
                                    selected=status_selected
                                    on_change=Callback::new(move |values: Vec<String>| {
                                        query.set_filter("status", FilterValue::Multi(values));
                                    })
                                />
                                <SearchInput
                                    value=search
                                    on_change=Callback::new(move |text: String| query.set_search(text))
                                    placeholder="Search plate or model...".to_string()
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
                                    field="plateNumber"
                                    label="Plate"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <SortableHeaderCell
                                    field="model"
                                    label="Model"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Status"</th>
                                <SortableHeaderCell
                                    field="year"
                                    label="Year"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Seats"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|row| row.id.to_string()
                                children=move |row| {
                                    view! {
                                        <tr>
                                            <td class="table__cell-mono">{row.plate_number.clone()}</td>
                                            <td>{row.model.clone()}</td>
                                            <td>{status_badge(row.status)}</td>
                                            <td class="table__cell-number">
                                                {row.year.map(|y| y.to_string()).unwrap_or_else(|| "—".to_string())}
                                            </td>
                                            <td class="table__cell-number">
                                                {row.seats.map(|s| s.to_string()).unwrap_or_else(|| "—".to_string())}
                                            </td>
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
