use std::collections::HashMap;

use contracts::domain::trip::TripRow;
use contracts::enums::{TripScope, TripStatus};
use contracts::query::{FilterValue, SortDirection, SortSpec};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::collection_query::{CollectionQuery, CollectionSource, QueryState};
use crate::shared::components::enum_filter::EnumFilter;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{MoneyCell, SortableHeaderCell};
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const SOURCE: CollectionSource = CollectionSource {
    path: "trips",
    search_fields: &["pickupAddress", "dropoffAddress"],
    error_fallback: "Failed to load trips",
};

fn status_badge(status: TripStatus) -> AnyView {
    let class = match status {
        TripStatus::Planned => "badge badge--neutral",
        TripStatus::InProgress => "badge badge--info",
        TripStatus::Completed => "badge badge--success",
        TripStatus::Cancelled => "badge badge--error",
    };
    view! { <span class=class>{status.label()}</span> }.into_any()
}

#[component]
pub fn TripsList() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    tabs_store.ensure_cars_loaded();
    let cars = tabs_store.cars();

    // "My trips" is the default partition; switching it swaps endpoint
    // semantics, so it is a scope, not a filter.
    let query = CollectionQuery::<TripRow>::with_state(
        SOURCE,
        QueryState::with_scope(
            TripScope::CreatedByMyCompany.key(),
            SortSpec::single("pickupAt", SortDirection::Descending),
        ),
    );

    let state = query.state();
    let items = query.items();
    let loading = query.loading();
    let is_filter_expanded = RwSignal::new(true);

    let scope = Signal::derive(move || state.get().scope);
    let sort = Signal::derive(move || state.get().sort);
    let search = Signal::derive(move || state.get().search);
    let status_selected = Signal::derive(move || state.get().filters.multi_values("status"));
    let active_filters_count = Signal::derive(move || state.get().filters.active_count());

    let car_labels = Signal::derive(move || {
        cars.get()
            .into_iter()
            .map(|car| (car.id, car.display_label()))
            .collect::<HashMap<i64, String>>()
    });

    let open_detail = move |id: i64| {
        tabs_store.open_tab(&format!("trips_detail_{}", id), &format!("Trip #{}", id));
    };

    let export_csv = move |_| {
        let rows = items.get_untracked();
        let labels = tabs_store.car_labels_snapshot();
        if let Err(e) = export_to_csv(&rows, &labels) {
            log::error!("CSV export failed: {}", e);
        }
    };

    view! {
        <PageFrame page_id="trips--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Trips"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().pagination.total_items.to_string()}
                    </span>
                    <div class="segmented">
                        {TripScope::all().iter().copied().map(|partition| {
                            view! {
                                <button
                                    class=move || {
                                        if scope.get().as_deref() == Some(partition.key()) {
                                            "segmented__option segmented__option--active"
                                        } else {
                                            "segmented__option"
                                        }
                                    }
                                    on:click=move |_| {
                                        query.set_scope(Some(partition.key().to_string()));
                                    }
                                >
                                    {partition.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export_csv
                        disabled=Signal::derive(move || items.get().is_empty())
                    >
                        {icon("download")}
                        " CSV"
                    </Button>
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
                                    options={TripStatus::all().iter().map(|s| (s.key(), s.label())).collect::<Vec<_>>()}
                                    selected=status_selected
                                    on_change=Callback::new(move |values: Vec<String>| {
                                        query.set_filter("status", FilterValue::Multi(values));
                                    })
                                />
                                <SearchInput
                                    value=search
                                    on_change=Callback::new(move |text: String| query.set_search(text))
                                    placeholder="Search pickup or dropoff...".to_string()
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
                                    field="pickupAt"
                                    label="Pickup"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Route"</th>
                                <SortableHeaderCell
                                    field="status"
                                    label="Status"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Car"</th>
                                <th>"Driver"</th>
                                <SortableHeaderCell
                                    field="distanceKm"
                                    label="Distance"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <SortableHeaderCell
                                    field="price"
                                    label="Price"
                                    sort=sort
                                    on_toggle=Callback::new(move |field| query.toggle_sort(field))
                                />
                                <th>"Dropoff"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|row| row.id.to_string()
                                children=move |row| {
                                    let id = row.id;
                                    let pickup = format_datetime(&row.pickup_at);
                                    let dropoff = format_optional_datetime(&row.dropoff_at);
                                    let route = format!("{} → {}", row.pickup_address, row.dropoff_address);
                                    let car = move || {
                                        row.car_id
                                            .and_then(|car_id| car_labels.get().get(&car_id).cloned())
                                            .unwrap_or_else(|| "—".to_string())
                                    };
                                    let driver = row.driver_name.clone().unwrap_or_else(|| "—".to_string());
                                    let distance = row
                                        .distance_km
                                        .map(|km| format!("{:.1} km", km))
                                        .unwrap_or_else(|| "—".to_string());
                                    view! {
                                        <tr>
                                            <td>
                                                <a
                                                    href="#"
                                                    class="table__link"
                                                    on:click=move |e| {
                                                        e.prevent_default();
                                                        open_detail(id);
                                                    }
                                                >
                                                    {pickup}
                                                </a>
                                            </td>
                                            <td class="table__cell-truncate">{route}</td>
                                            <td>{status_badge(row.status)}</td>
                                            <td>{car}</td>
                                            <td>{driver}</td>
                                            <td class="table__cell-number">{distance}</td>
                                            <MoneyCell amount=row.price currency=row.currency.clone() />
                                            <td>{dropoff}</td>
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

fn export_to_csv(rows: &[TripRow], car_labels: &HashMap<i64, String>) -> Result<(), String> {
    let mut csv = String::from("\u{FEFF}");
    csv.push_str("Pickup;Dropoff;Route;Status;Car;Driver;Distance km;Price;Currency\n");
    for trip in rows {
        let car = trip
            .car_id
            .and_then(|id| car_labels.get(&id).cloned())
            .unwrap_or_default();
        csv.push_str(&format!(
            "\"{}\";\"{}\";\"{} -> {}\";\"{}\";\"{}\";\"{}\";{};{:.2};\"{}\"\n",
            trip.pickup_at.format("%Y-%m-%d %H:%M"),
            trip.dropoff_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            trip.pickup_address.replace('"', "\"\""),
            trip.dropoff_address.replace('"', "\"\""),
            trip.status.key(),
            car.replace('"', "\"\""),
            trip.driver_name.as_deref().unwrap_or("").replace('"', "\"\""),
            trip.distance_km.map(|km| km.to_string()).unwrap_or_default(),
            trip.price as f64 / 100.0,
            trip.currency,
        ));
    }

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&wasm_bindgen::JsValue::from_str(&csv));
    let blob_props = BlobPropertyBag::new();
    blob_props.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&blob_parts, &blob_props)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create URL: {:?}", e))?;
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let document = window.document().ok_or_else(|| "no document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("{:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(&format!(
        "trips_{}.csv",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    anchor.click();
    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}
