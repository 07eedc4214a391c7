use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::TripStatus;

/// One row of the trips listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRow {
    pub id: i64,
    pub status: TripStatus,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub pickup_at: DateTime<Utc>,
    pub dropoff_at: Option<DateTime<Utc>>,
    pub car_id: Option<i64>,
    pub driver_name: Option<String>,
    pub distance_km: Option<f64>,
    /// Agreed price in minor units.
    pub price: i64,
    pub currency: String,
}

/// Full trip payload behind `/api/trips/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetail {
    pub id: i64,
    pub status: TripStatus,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub pickup_at: DateTime<Utc>,
    pub dropoff_at: Option<DateTime<Utc>>,
    pub car_id: Option<i64>,
    pub driver_name: Option<String>,
    pub distance_km: Option<f64>,
    pub price: i64,
    pub currency: String,
    pub created_by_company: String,
    pub assigned_company: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
