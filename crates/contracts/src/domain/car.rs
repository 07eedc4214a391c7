use serde::{Deserialize, Serialize};

use crate::enums::CarStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRow {
    pub id: i64,
    pub plate_number: String,
    pub model: String,
    pub status: CarStatus,
    pub year: Option<i32>,
    pub seats: Option<i32>,
}

impl CarRow {
    /// Short display label used by pages that resolve `car_id`
    /// references through the shared cars cache.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.plate_number, self.model)
    }
}
