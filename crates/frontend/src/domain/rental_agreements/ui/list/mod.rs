use contracts::domain::money::format_minor_units_with_currency;
use contracts::domain::rental_agreement::RentalAgreementRow;
use contracts::enums::{AgreementStatus, PricingModel};
use contracts::query::{FilterValue, SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;

use crate::shared::collection_query::{CollectionQuery, CollectionSource, QueryState};
use crate::shared::components::enum_filter::EnumFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{MoneyCell, SortableHeaderCell};
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SOURCE: CollectionSource = CollectionSource {
    path: "rental-agreements",
    search_fields: &["number", "carPlate"],
    error_fallback: "Failed to load rental agreements",
};

fn status_badge(status: AgreementStatus) -> AnyView {
    let class = match status {
        AgreementStatus::Draft => "badge badge--neutral",
        AgreementStatus::Active => "badge badge--success",
        AgreementStatus::Suspended => "badge badge--warning",
        AgreementStatus::Terminated => "badge badge--error",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

#[component]
pub fn RentalAgreementsList() -> impl IntoView {
    let query = CollectionQuery::<RentalAgreementRow>::with_state(
        SOURCE,
        QueryState::with_sort(SortSpec::single("startsOn", SortDirection::Descending)),
    );

    let state = query.state();
    let items = query.items();
    let loading = query.loading();
    let is_filter_expanded = RwSignal::new(true);

    let sort = Signal::derive(move || state.get().sort);
    let search = Signal::derive(move || state.get().search);
    let status_selected = Signal::derive(move || state.get().filters.multi_values("status"));
    let model_selected =
        Signal::derive(move || state.get().filters.multi_values("pricingModel.model"));
    let active_filters_count = Signal::derive(move || state.get().filters.active_count());

    view! {
        <PageFrame page_id="rental_agreements--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Rental agreements"</h1>
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
                                    options={AgreementStatus::all().iter().map(|s| (s.key(), s.label())).collect::<Vec<_>>()}
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
                                    placeholder="Search number or plate...".to_string()
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
                                <th>"Status"</th>
                                <th>"Car"</th>
                                <th>"Driver"</th>
                                <SortableHeaderCell
                                    field="startsOn"
                                    label="Starts"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Ends"</th>
                                <th>"Pricing"</th>
                                <SortableHeaderCell
                                    field="totalBilled"
                                    label="Billed"
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
                                            <td>{row.number.clone()}</td>
                                            <td>{status_badge(row.status)}</td>
                                            <td>{row.car_plate.clone()}</td>
                                            <td>{row.driver_name.clone().unwrap_or_else(|| "—".to_string())}</td>
                                            <td>{format_date(&row.starts_on)}</td>
                                            <td>{format_optional_date(&row.ends_on)}</td>
                                            <td class="table__cell-truncate">{pricing}</td>
                                            <MoneyCell
                                                amount=row.total_billed
                                                currency=row.pricing_model.currency.clone()
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
