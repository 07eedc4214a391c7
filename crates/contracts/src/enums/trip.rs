use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    /// Wire key, as used in `filters` JSON and row payloads.
    pub fn key(&self) -> &'static str {
        match self {
            TripStatus::Planned => "PLANNED",
            TripStatus::InProgress => "IN_PROGRESS",
            TripStatus::Completed => "COMPLETED",
            TripStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Planned => "Planned",
            TripStatus::InProgress => "In progress",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> &'static [TripStatus] {
        &[
            TripStatus::Planned,
            TripStatus::InProgress,
            TripStatus::Completed,
            TripStatus::Cancelled,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.key() == key)
    }
}

/// Which side of the marketplace a trips listing shows.
///
/// Not a filter: the partition is a top-level `type` query parameter
/// because it changes the endpoint semantics (own trips vs. trips
/// offered to the company vs. the open board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripScope {
    CreatedByMyCompany,
    AssignedToMyCompany,
    Available,
}

impl TripScope {
    pub fn key(&self) -> &'static str {
        match self {
            TripScope::CreatedByMyCompany => "CREATED_BY_MY_COMPANY",
            TripScope::AssignedToMyCompany => "ASSIGNED_TO_MY_COMPANY",
            TripScope::Available => "AVAILABLE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripScope::CreatedByMyCompany => "My trips",
            TripScope::AssignedToMyCompany => "Assigned to me",
            TripScope::Available => "Available",
        }
    }

    pub fn all() -> &'static [TripScope] {
        &[
            TripScope::CreatedByMyCompany,
            TripScope::AssignedToMyCompany,
            TripScope::Available,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_by_key() {
        for status in TripStatus::all() {
            assert_eq!(TripStatus::from_key(status.key()), Some(*status));
        }
        assert_eq!(TripStatus::from_key("Completed"), None);
    }

    #[test]
    fn status_serializes_as_wire_key() {
        let json = serde_json::to_string(&TripStatus::InProgress).unwrap();
        assert_eq!(json, r#""IN_PROGRESS""#);
    }
}
