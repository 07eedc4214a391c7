use contracts::query::{SortDirection, SortSpec};
use leptos::prelude::*;

/// Indicator glyph for a header: position in the current sort spec or
/// the neutral both-ways arrow.
pub fn sort_indicator(sort: &SortSpec, field: &str) -> &'static str {
    match sort.direction_of(field) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

/// `<th>` that drives the 3-state sort cycle of its column.
#[component]
pub fn SortableHeaderCell(
    field: &'static str,
    label: &'static str,

    #[prop(into)]
    sort: Signal<SortSpec>,

    on_toggle: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <th
            class="table__sortable-header"
            title="Sort"
            on:click=move |_| on_toggle.run(field)
        >
            {label}
            <span class="table__sort-indicator">
                {move || sort_indicator(&sort.get(), field)}
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_the_sort_cycle() {
        let mut sort = SortSpec::new();
        assert_eq!(sort_indicator(&sort, "price"), " ⇅");
        sort.toggle("price");
        assert_eq!(sort_indicator(&sort, "price"), " ▲");
        sort.toggle("price");
        assert_eq!(sort_indicator(&sort, "price"), " ▼");
        sort.toggle("price");
        assert_eq!(sort_indicator(&sort, "price"), " ⇅");
    }
}
