use serde::{Deserialize, Serialize};

/// Metadata attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
}

/// Envelope of a successful list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Body shape of a failed request. The backend is not guaranteed to
/// send one, so `message` stays optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_response_parses_data_and_meta() {
        let body = r#"{"data":[{"id":7}],"meta":{"total":37}}"#;
        #[derive(Deserialize)]
        struct Row {
            id: i64,
        }
        let page: PagedResponse<Row> = serde_json::from_str(body).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 7);
        assert_eq!(page.meta.total, 37);
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let parsed: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.message, None);
    }
}
