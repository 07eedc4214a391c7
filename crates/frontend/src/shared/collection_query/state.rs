use contracts::query::{FilterSet, FilterValue, Pagination, QuerySnapshot, SortSpec};

/// The full query state owned by one [`super::CollectionQuery`].
///
/// Mutations encode the pagination-reset rules: anything that changes
/// which rows qualify (filters, search, scope) sends the cursor back to
/// page 1, while sort-only changes keep the current page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    pub filters: FilterSet,
    pub search: String,
    pub sort: SortSpec,
    pub pagination: Pagination,
    pub scope: Option<String>,
}

impl QueryState {
    pub fn with_sort(sort: SortSpec) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    pub fn with_scope(scope: &str, sort: SortSpec) -> Self {
        Self {
            sort,
            scope: Some(scope.to_string()),
            ..Default::default()
        }
    }

    pub fn set_filter(&mut self, field: &str, value: FilterValue) {
        self.filters.set(field, value);
        self.pagination.reset_page();
    }

    pub fn set_search(&mut self, text: String) {
        if self.search == text {
            return;
        }
        self.search = text;
        self.pagination.reset_page();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn set_page(&mut self, page: u32) {
        self.pagination.set_page(page);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.pagination.set_page_size(page_size);
    }

    pub fn set_scope(&mut self, scope: Option<String>) {
        if self.scope == scope {
            return;
        }
        self.scope = scope;
        self.pagination.reset_page();
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        QuerySnapshot {
            filters: self.filters.clone(),
            search: self.search.clone(),
            sort: self.sort.clone(),
            page: self.pagination.page,
            page_size: self.pagination.page_size,
            scope: self.scope.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on_page(page: u32) -> QueryState {
        let mut state = QueryState::default();
        state.pagination.page = page;
        state
    }

    #[test]
    fn snapshot_derivation_is_idempotent() {
        let mut state = QueryState::default();
        state.set_filter("status", FilterValue::Multi(vec!["PLANNED".to_string()]));
        state.set_search("berlin".to_string());
        assert_eq!(state.snapshot(), state.snapshot());
    }

    #[test]
    fn filter_change_resets_pagination() {
        let mut state = state_on_page(3);
        state.set_filter("status", FilterValue::Multi(vec!["CANCELLED".to_string()]));
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn search_change_resets_pagination_but_same_text_does_not() {
        let mut state = state_on_page(4);
        state.set_search("acme".to_string());
        assert_eq!(state.pagination.page, 1);

        state.set_page(4);
        state.set_search("acme".to_string());
        assert_eq!(state.pagination.page, 4);
    }

    #[test]
    fn sort_toggle_keeps_the_current_page() {
        let mut state = state_on_page(5);
        state.toggle_sort("pickupAt");
        assert_eq!(state.pagination.page, 5);
    }

    #[test]
    fn scope_switch_resets_pagination() {
        let mut state = state_on_page(2);
        state.scope = Some("CREATED_BY_MY_COMPANY".to_string());
        state.set_scope(Some("AVAILABLE".to_string()));
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn trips_status_filter_scenario() {
        // Page 3 at size 10, then a status filter is applied: the next
        // request must ask for page 1 with the filter JSON attached.
        let mut state = QueryState::default();
        state.set_page_size(10);
        state.set_page(3);
        state.set_filter(
            "status",
            FilterValue::Multi(vec!["CANCELLED".to_string(), "COMPLETED".to_string()]),
        );

        let query = state.snapshot().to_query_string(&[]);
        assert!(query.starts_with("page=1&limit=10&filters="));

        // A response with meta.total = 37 re-paginates to 4 pages.
        state.pagination.total_items = 37;
        assert_eq!(state.pagination.total_pages(), 4);
    }
}
