//! Tab strip and page container. `render_tab_content` is the single
//! source of truth for mapping a tab key to its page view.

use crate::domain::bank_accounts::ui::list::BankAccountsList;
use crate::domain::cars::ui::list::CarsList;
use crate::domain::drivers::ui::list::DriversList;
use crate::domain::invoices::ui::list::InvoicesList;
use crate::domain::offers::ui::list::OffersList;
use crate::domain::rental_agreements::ui::list::RentalAgreementsList;
use crate::domain::trips::ui::details::TripDetails;
use crate::domain::trips::ui::list::TripsList;
use crate::layout::center::tabs::tab::TabHandle;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHandle tab=tab tabs_store=tabs_store /> }
            />
        </div>
        <div class="tab-pages">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabPage tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}

/// Keeps a page mounted for the lifetime of its tab; switching tabs
/// only toggles visibility, so list state survives tab switches.
#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let key_for_active = key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key_for_active.as_str());

    let content = render_tab_content(&key, tabs_store);

    view! {
        <div
            class="tab-page"
            style:display=move || if is_active() { "block" } else { "none" }
        >
            {content}
        </div>
    }
}

fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "trips" => view! { <TripsList /> }.into_any(),
        k if k.starts_with("trips_detail_") => {
            let id = k.strip_prefix("trips_detail_").unwrap().to_string();
            view! {
                <TripDetails
                    trip_id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&key_for_close);
                    })
                />
            }
            .into_any()
        }

        "rental_agreements" => view! { <RentalAgreementsList /> }.into_any(),
        "offers" => view! { <OffersList /> }.into_any(),
        "invoices" => view! { <InvoicesList /> }.into_any(),
        "bank_accounts" => view! { <BankAccountsList /> }.into_any(),
        "cars" => view! { <CarsList /> }.into_any(),
        "drivers" => view! { <DriversList /> }.into_any(),

        unknown => view! {
            <div class="tab-page__placeholder">
                {format!("Unknown tab: {}", unknown)}
            </div>
        }
        .into_any(),
    }
}
