use leptos::prelude::*;

/// Checkbox group over a fixed key/label table. Selections round-trip
/// by key; labels are display-only.
#[component]
pub fn EnumFilter(
    label: &'static str,

    /// `(key, label)` pairs, usually built from a contracts enum's
    /// `all()` table.
    options: Vec<(&'static str, &'static str)>,

    #[prop(into)]
    selected: Signal<Vec<String>>,

    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="filter-field">
            <label class="filter-field__label">{label}</label>
            <div class="filter-field__options">
                {options.into_iter().map(|(key, option_label)| {
                    view! {
                        <label class="filter-field__option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.get().iter().any(|k| k == key)
                                on:change=move |_| {
                                    let mut values = selected.get_untracked();
                                    if let Some(position) = values.iter().position(|k| k == key) {
                                        values.remove(position);
                                    } else {
                                        values.push(key.to_string());
                                    }
                                    on_change.run(values);
                                }
                            />
                            <span>{option_label}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
