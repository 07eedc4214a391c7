use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub hired_on: Option<NaiveDate>,
}
