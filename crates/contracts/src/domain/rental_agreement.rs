use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pricing_terms::PricingTerms;
use crate::enums::AgreementStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalAgreementRow {
    pub id: i64,
    /// Business number, e.g. "RA-2026-0413".
    pub number: String,
    pub status: AgreementStatus,
    pub car_plate: String,
    pub driver_name: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub pricing_model: PricingTerms,
    /// Billed so far, minor units.
    pub total_billed: i64,
}
