use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::InvoiceStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub id: i64,
    pub number: String,
    pub status: InvoiceStatus,
    pub counterparty_name: String,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
    /// Invoice total in minor units.
    pub total: i64,
    pub currency: String,
}
