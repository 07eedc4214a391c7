//! PageFrame — standard root wrapper for every page rendered inside a
//! tab. Guarantees an `id` in `{entity}--{category}` form and a
//! `data-page-category` attribute on the root element, so a DOM id
//! copied from the inspector lands in the right module on search.

use leptos::prelude::*;

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[component]
pub fn PageFrame(
    /// HTML id in `{entity}--{category}` form, e.g. `"trips--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_requires_entity_and_category() {
        assert!(is_valid_page_id("trips--list"));
        assert!(!is_valid_page_id("trips"));
        assert!(!is_valid_page_id("--list"));
    }
}
