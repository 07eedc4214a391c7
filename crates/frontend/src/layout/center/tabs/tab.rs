use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// One handle in the tab strip.
#[component]
pub fn TabHandle(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key.clone();
    let key_for_class = key.clone();
    let key_for_close = key.clone();

    view! {
        <div
            class=move || {
                if tabs_store.active.get().as_deref() == Some(key_for_class.as_str()) {
                    "tab-handle tab-handle--active"
                } else {
                    "tab-handle"
                }
            }
            on:click=move |_| tabs_store.activate_tab(&key)
        >
            <span class="tab-handle__title">{tab.title.clone()}</span>
            <span
                class="tab-handle__close"
                title="Close tab"
                on:click=move |e| {
                    e.stop_propagation();
                    tabs_store.close_tab(&key_for_close);
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
