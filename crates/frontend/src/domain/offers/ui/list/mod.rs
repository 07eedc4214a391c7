use contracts::domain::money::format_minor_units_with_currency;
use contracts::domain::offer::OfferRow;
use contracts::enums::{OfferStatus, PricingModel};
use contracts::query::{FilterValue, SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

use crate::shared::collection_query::{CollectionQuery, CollectionSource, QueryState};
use crate::shared::components::enum_filter::EnumFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SOURCE: CollectionSource = CollectionSource {
    path: "offers",
    search_fields: &["route"],
    error_fallback: "Failed to load offers",
};

fn status_badge(status: OfferStatus) -> AnyView {
    let class = match status {
        OfferStatus::Open => "badge badge--info",
        OfferStatus::Accepted => "badge badge--success",
        OfferStatus::Declined => "badge badge--error",
        OfferStatus::Expired => "badge badge--neutral",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

#[component]
pub fn OffersList() -> impl IntoView {
    let query = CollectionQuery::<OfferRow>::with_state(
        SOURCE,
        QueryState::with_sort(SortSpec::single("createdAt", SortDirection::Descending)),
    );

    let state = query.state();
    let items = query.items();
    let loading = query.loading();
    let is_filter_expanded = RwSignal::new(false);

    let sort = Signal::derive(move || state.get().sort);
    let search = Signal::derive(move || state.get().search);
    let status_selected = Signal::derive(move || state.get().filters.multi_values("status"));
    let model_selected =
        Signal::derive(move || state.get().filters.multi_values("pricingModel.model"));
    let active_filters_count = Signal::derive(move || state.get().filters.active_count());

    view! {
        <PageFrame page_id="offers--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Offers"</h1>
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
                                    options={OfferStatus::all().iter().map(|s| (s.key(), s.label())).collect::<Vec<_>>()}
                                    selected=status_selected
                                    on_change=Callback::new(move |values: Vec<String>| {
                                        query.set_filter("status", FilterValue::Multi(values));
                                    })
                                />
                                <EnumFilter
                                    label="Pricing model"
                                    options={PricingModel::all().iter().map(|m| (m.key(), m.label())).collect::<Vec<_>>()}
                                    selected=model_selected
                                    on_change=Callback::new(move |values: Vec<String>| {
                                        query.set_filter("pricingModel.model", FilterValue::Multi(values));
                                    })
                                />
                                <SearchInput
                                    value=search
                                    on_change=Callback::new(move |text: String| query.set_search(text))
                                    placeholder="Search route...".to_string()
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
                                    field="createdAt"
                                    label="Created"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Route"</th>
                                <th>"Company"</th>
                                <th>"Status"</th>
                                <th>"Pricing"</th>
                                <SortableHeaderCell
                                    field="validUntil"
                                    label="Valid until"
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
                                    let pricing = format!(
                                        "{} · {}",
                                        row.pricing_model.model.label(),
                                        format_minor_units_with_currency(
                                            row.pricing_model.rate,
                                            &row.pricing_model.currency,
                                        ),
                                    );
                                    view! {
                                        <tr>
                                            <td>{format_datetime(&row.created_at)}</td>
                                            <td class="table__cell-truncate">{row.route.clone()}</td>
                                            <td>{row.company_name.clone()}</td>
                                            <td>{status_badge(row.status)}</td>
                                            <td class="table__cell-truncate">{pricing}</td>
                                            <td>{format_datetime(&row.valid_until)}</td>
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
