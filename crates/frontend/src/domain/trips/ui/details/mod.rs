use contracts::domain::money::format_minor_units_with_currency;
use contracts::domain::trip::TripDetail;
use contracts::enums::TripStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::{api_url, fetch_json};
use crate::shared::date_utils::{format_datetime, format_optional_datetime};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

fn status_class(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Planned => "badge badge--neutral",
        TripStatus::InProgress => "badge badge--info",
        TripStatus::Completed => "badge badge--success",
        TripStatus::Cancelled => "badge badge--error",
    }
}

/// Read-only trip card opened from the trips list.
#[component]
pub fn TripDetails(trip_id: String, on_close: Callback<()>) -> impl IntoView {
    let (detail, set_detail) = signal(Option::<TripDetail>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let id_for_fetch = trip_id.clone();
    spawn_local(async move {
        let url = api_url(&format!("/api/trips/{}", id_for_fetch));
        match fetch_json::<TripDetail>(&url).await {
            Ok(trip) => set_detail.set(Some(trip)),
            Err(err) => set_error.set(Some(err.user_message("Failed to load trip"))),
        }
    });

    view! {
        <PageFrame page_id="trips--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Trip #{}", trip_id)}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        "Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                {move || detail.get().map(|trip| {
                    let price = format_minor_units_with_currency(trip.price, &trip.currency);
                    let distance = trip
                        .distance_km
                        .map(|km| format!("{:.1} km", km))
                        .unwrap_or_else(|| "—".to_string());
                    view! {
                        <div class="detail-card">
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Status"</span>
                                <span class=status_class(trip.status)>{trip.status.label()}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Pickup"</span>
                                <span>{format!("{} · {}", format_datetime(&trip.pickup_at), trip.pickup_address)}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Dropoff"</span>
                                <span>{format!("{} · {}", format_optional_datetime(&trip.dropoff_at), trip.dropoff_address)}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Driver"</span>
                                <span>{trip.driver_name.clone().unwrap_or_else(|| "—".to_string())}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Distance"</span>
                                <span>{distance}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Price"</span>
                                <span>{price}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Created by"</span>
                                <span>{trip.created_by_company.clone()}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Assigned to"</span>
                                <span>{trip.assigned_company.clone().unwrap_or_else(|| "—".to_string())}</span>
                            </div>
                            <div class="detail-card__row">
                                <span class="detail-card__label">"Created at"</span>
                                <span>{format_datetime(&trip.created_at)}</span>
                            </div>
                            {trip.notes.clone().map(|notes| view! {
                                <div class="detail-card__row">
                                    <span class="detail-card__label">"Notes"</span>
                                    <span>{notes}</span>
                                </div>
                            })}
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
