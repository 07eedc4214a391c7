use super::{FilterSet, SortSpec};

/// The complete, comparable representation of one collection query.
///
/// Two equal snapshots describe the same request, so equality is what
/// decides whether a fetch needs to be issued at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySnapshot {
    pub filters: FilterSet,
    pub search: String,
    pub sort: SortSpec,
    pub page: u32,
    pub page_size: u32,
    /// Top-level partition (`type` parameter), not a filter: switching
    /// it changes which endpoint semantics apply.
    pub scope: Option<String>,
}

impl QuerySnapshot {
    /// Serialize into the query string of a list request.
    ///
    /// `search_fields` is the allow-list of backend columns the
    /// free-text search applies to; it is only sent together with a
    /// non-empty search term.
    pub fn to_query_string(&self, search_fields: &[&str]) -> String {
        let mut pairs = vec![
            format!("page={}", self.page),
            format!("limit={}", self.page_size),
        ];
        if let Some(json) = self.filters.to_json_object() {
            pairs.push(format!("filters={}", urlencoding::encode(&json.to_string())));
        }
        if let Some(sort) = self.sort.to_param() {
            pairs.push(format!("sort={}", sort));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(search)));
            pairs.push(format!("searchFields={}", search_fields.join(",")));
        }
        if let Some(scope) = &self.scope {
            pairs.push(format!("type={}", scope));
        }
        pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterValue;

    fn snapshot_with_status_filter() -> QuerySnapshot {
        let mut filters = FilterSet::new();
        filters.set(
            "status",
            FilterValue::Multi(vec!["CANCELLED".to_string(), "COMPLETED".to_string()]),
        );
        QuerySnapshot {
            filters,
            search: String::new(),
            sort: SortSpec::new(),
            page: 1,
            page_size: 10,
            scope: None,
        }
    }

    #[test]
    fn equal_state_derives_equal_snapshots() {
        assert_eq!(snapshot_with_status_filter(), snapshot_with_status_filter());
    }

    #[test]
    fn status_filter_scenario_serializes_encoded_json() {
        let query = snapshot_with_status_filter().to_query_string(&[]);
        assert_eq!(
            query,
            "page=1&limit=10&filters=%7B%22status%22%3A%5B%22CANCELLED%22%2C%22COMPLETED%22%5D%7D"
        );
    }

    #[test]
    fn search_brings_its_field_allow_list() {
        let snapshot = QuerySnapshot {
            search: "berlin hbf".to_string(),
            page: 1,
            page_size: 20,
            ..Default::default()
        };
        let query = snapshot.to_query_string(&["pickupAddress", "dropoffAddress"]);
        assert_eq!(
            query,
            "page=1&limit=20&search=berlin%20hbf&searchFields=pickupAddress,dropoffAddress"
        );
    }

    #[test]
    fn blank_search_sends_neither_search_nor_fields() {
        let snapshot = QuerySnapshot {
            search: "   ".to_string(),
            page: 2,
            page_size: 50,
            ..Default::default()
        };
        assert_eq!(
            snapshot.to_query_string(&["iban"]),
            "page=2&limit=50"
        );
    }

    #[test]
    fn scope_is_a_top_level_parameter() {
        let snapshot = QuerySnapshot {
            page: 1,
            page_size: 10,
            scope: Some("AVAILABLE".to_string()),
            ..Default::default()
        };
        assert_eq!(
            snapshot.to_query_string(&[]),
            "page=1&limit=10&type=AVAILABLE"
        );
    }

    #[test]
    fn sort_joins_field_direction_pairs() {
        let mut sort = SortSpec::new();
        sort.toggle("pickupAt");
        sort.toggle("price");
        sort.toggle("price");
        let snapshot = QuerySnapshot {
            sort,
            page: 1,
            page_size: 10,
            ..Default::default()
        };
        assert_eq!(
            snapshot.to_query_string(&[]),
            "page=1&limit=10&sort=pickupAt:asc,price:desc"
        );
    }
}
