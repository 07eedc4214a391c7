use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pricing_terms::PricingTerms;
use crate::enums::OfferStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferRow {
    pub id: i64,
    pub status: OfferStatus,
    /// Free-form route description, e.g. "Hamburg → Munich".
    pub route: String,
    pub company_name: String,
    pub pricing_model: PricingTerms,
    pub valid_until: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
