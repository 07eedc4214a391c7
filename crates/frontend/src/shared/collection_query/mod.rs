//! Generic controller behind every table-backed page.
//!
//! One instance owns the filter/search/sort/pagination state of a
//! single collection, derives the canonical request from it, issues at
//! most one fetch per logical change (leading/trailing debounce for
//! typed input, immediate for sort/pagination/scope), and reconciles
//! responses under a last-request-wins rule so an out-of-order response
//! can never overwrite fresher rows.

pub mod debounce;
pub mod state;

use contracts::query::{FilterValue, PagedResponse, QuerySnapshot};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::layout::toast::Toasts;
use crate::shared::api_utils::{api_base, fetch_json};

pub use debounce::{DebounceDecision, DebounceGate, RequestSequencer, DEBOUNCE_WINDOW_MS};
pub use state::QueryState;

/// Static description of one backend collection.
#[derive(Debug, Clone, Copy)]
pub struct CollectionSource {
    /// Path segment under `/api/`, e.g. `"trips"`.
    pub path: &'static str,
    /// Backend columns the free-text search applies to.
    pub search_fields: &'static [&'static str],
    /// Toast text when the backend did not supply a message.
    pub error_fallback: &'static str,
}

pub struct CollectionQuery<T: Send + Sync + 'static> {
    source: CollectionSource,
    state: RwSignal<QueryState>,
    items: RwSignal<Vec<T>>,
    loading: RwSignal<bool>,
    gate: StoredValue<DebounceGate>,
    trail_generation: StoredValue<u64>,
    sequencer: StoredValue<RequestSequencer>,
    last_sent: StoredValue<Option<QuerySnapshot>>,
    toasts: Toasts,
}

impl<T: Send + Sync + 'static> Clone for CollectionQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CollectionQuery<T> {}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

impl<T> CollectionQuery<T>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
{
    /// Create a controller with the given initial state and
    /// immediately load the first page.
    pub fn with_state(source: CollectionSource, initial: QueryState) -> Self {
        let controller = Self {
            source,
            state: RwSignal::new(initial),
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            gate: StoredValue::new(DebounceGate::new(DEBOUNCE_WINDOW_MS)),
            trail_generation: StoredValue::new(0),
            sequencer: StoredValue::new(RequestSequencer::default()),
            last_sent: StoredValue::new(None),
            toasts: use_context::<Toasts>().expect("Toasts context not found"),
        };
        controller.gate.update_value(|g| g.note_fire(now_ms()));
        controller.fetch(controller.state.with_untracked(|s| s.snapshot()));
        controller
    }

    pub fn state(&self) -> RwSignal<QueryState> {
        self.state
    }

    pub fn items(&self) -> RwSignal<Vec<T>> {
        self.items
    }

    pub fn loading(&self) -> RwSignal<bool> {
        self.loading
    }

    // ── user-driven edits ────────────────────────────────────────────

    pub fn set_filter(self, field: &str, value: FilterValue) {
        self.state.update(|s| s.set_filter(field, value));
        self.request_debounced();
    }

    pub fn set_search(self, text: String) {
        self.state.update(|s| s.set_search(text));
        self.request_debounced();
    }

    pub fn toggle_sort(self, field: &str) {
        self.state.update(|s| s.toggle_sort(field));
        self.fetch_now();
    }

    pub fn set_page(self, page: u32) {
        self.state.update(|s| s.set_page(page));
        self.fetch_now();
    }

    pub fn set_page_size(self, page_size: u32) {
        self.state.update(|s| s.set_page_size(page_size));
        self.fetch_now();
    }

    pub fn set_scope(self, scope: Option<String>) {
        self.state.update(|s| s.set_scope(scope));
        self.fetch_now();
    }

    /// Re-run the current query unconditionally (refresh button, after
    /// a successful form submit).
    pub fn refresh(self) {
        self.cancel_trailing();
        self.gate.update_value(|g| g.note_fire(now_ms()));
        self.fetch(self.state.with_untracked(|s| s.snapshot()));
    }

    // ── scheduling ───────────────────────────────────────────────────

    fn request_debounced(self) {
        let now = now_ms();
        let mut decision = DebounceDecision::Trail;
        self.gate.update_value(|g| decision = g.on_event(now));
        match decision {
            DebounceDecision::FireNow => {
                self.cancel_trailing();
                self.fetch_if_changed();
            }
            DebounceDecision::Trail => {
                let generation = self.trail_generation.with_value(|g| *g) + 1;
                self.trail_generation.set_value(generation);
                let delay = self.gate.with_value(|g| g.window_ms()) as u32;
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                    // A newer change or an immediate fetch owns the
                    // trailing slot now.
                    if self.trail_generation.with_value(|g| *g) != generation {
                        return;
                    }
                    self.gate.update_value(|g| g.note_fire(now_ms()));
                    self.fetch_if_changed();
                });
            }
        }
    }

    fn fetch_now(self) {
        self.cancel_trailing();
        self.gate.update_value(|g| g.note_fire(now_ms()));
        self.fetch_if_changed();
    }

    fn cancel_trailing(self) {
        self.trail_generation.update_value(|g| *g += 1);
    }

    /// Issue a fetch only when the snapshot differs from the last one
    /// sent; a coalesced burst that ends where it started stays silent.
    fn fetch_if_changed(self) {
        let snapshot = self.state.with_untracked(|s| s.snapshot());
        let unchanged = self
            .last_sent
            .with_value(|last| last.as_ref() == Some(&snapshot));
        if unchanged {
            return;
        }
        self.fetch(snapshot);
    }

    fn fetch(self, snapshot: QuerySnapshot) {
        let mut request_id = 0;
        self.sequencer.update_value(|s| request_id = s.begin());
        self.last_sent.set_value(Some(snapshot.clone()));
        self.loading.set(true);

        spawn_local(async move {
            let url = format!(
                "{}/api/{}?{}",
                api_base(),
                self.source.path,
                snapshot.to_query_string(self.source.search_fields)
            );
            let result = fetch_json::<PagedResponse<T>>(&url).await;

            // Superseded request: a newer fetch owns the list and the
            // loading flag, whatever this response says.
            if !self.sequencer.with_value(|s| s.is_current(request_id)) {
                return;
            }
            self.loading.set(false);

            match result {
                Ok(page) => {
                    self.items.set(page.data);
                    self.state
                        .update(|s| s.pagination.total_items = page.meta.total);
                }
                Err(err) => {
                    // Keep the rows and totals of the last completed
                    // fetch; only report.
                    log::error!("GET /api/{} failed: {}", self.source.path, err);
                    self.toasts
                        .error(err.user_message(self.source.error_fallback));
                }
            }
        });
    }
}
