use leptos::prelude::*;

use crate::shared::icons::icon;

/// Free-text search box with a clear button.
///
/// Every keystroke is forwarded as-is; coalescing bursts into one
/// request is the collection controller's job, so no timer lives here.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,

    on_change: Callback<String>,

    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        title="Clear"
                        on:click=move |_| on_change.run(String::new())
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
