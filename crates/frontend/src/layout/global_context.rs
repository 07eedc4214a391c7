use contracts::domain::car::CarRow;
use contracts::query::PagedResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::api_utils::{api_url, fetch_json};

/// App-wide store provided at the root of the shell.
///
/// Owns the open-tab list and the shared cars reference cache that
/// pages resolve `car_id` values through. Every field is a signal, so
/// consumers choose between a one-off snapshot (`*_untracked`) and a
/// reactive subscription.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    cars: RwSignal<Vec<CarRow>>,
    cars_requested: StoredValue<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            cars: RwSignal::new(Vec::new()),
            cars_requested: StoredValue::new(false),
        }
    }

    /// Mirror the active tab into the URL query string and restore it
    /// on load, so a reloaded browser lands on the same tab.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if !exists {
                let title = crate::layout::tab_labels::tab_label_for_key(&active_key).to_string();
                self.open_tab(&active_key, &title);
            } else {
                self.activate_tab(&active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    "active".to_string(),
                    active_key.clone(),
                )]))
                .unwrap_or_default();
                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    // ── shared cars cache ────────────────────────────────────────────

    /// Load the cars reference list once per session. Pages call this
    /// on mount; repeated calls are no-ops.
    pub fn ensure_cars_loaded(&self) {
        if self.cars_requested.get_value() {
            return;
        }
        self.cars_requested.set_value(true);

        let cars = self.cars;
        spawn_local(async move {
            let url = api_url("/api/cars?page=1&limit=100");
            match fetch_json::<PagedResponse<CarRow>>(&url).await {
                Ok(page) => cars.set(page.data),
                Err(err) => log::warn!("cars cache load failed: {}", err),
            }
        });
    }

    /// Reactive subscription to the cars reference list.
    pub fn cars(&self) -> RwSignal<Vec<CarRow>> {
        self.cars
    }

    /// One-off snapshot, id → display label.
    pub fn car_labels_snapshot(&self) -> HashMap<i64, String> {
        self.cars.with_untracked(|cars| {
            cars.iter().map(|c| (c.id, c.display_label())).collect()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}
