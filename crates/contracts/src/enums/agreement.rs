use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgreementStatus {
    Draft,
    Active,
    Suspended,
    Terminated,
}

impl AgreementStatus {
    pub fn key(&self) -> &'static str {
        match self {
            AgreementStatus::Draft => "DRAFT",
            AgreementStatus::Active => "ACTIVE",
            AgreementStatus::Suspended => "SUSPENDED",
            AgreementStatus::Terminated => "TERMINATED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgreementStatus::Draft => "Draft",
            AgreementStatus::Active => "Active",
            AgreementStatus::Suspended => "Suspended",
            AgreementStatus::Terminated => "Terminated",
        }
    }

    pub fn all() -> &'static [AgreementStatus] {
        &[
            AgreementStatus::Draft,
            AgreementStatus::Active,
            AgreementStatus::Suspended,
            AgreementStatus::Terminated,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.key() == key)
    }
}
