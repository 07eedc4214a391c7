use serde::{Deserialize, Serialize};

/// How a rental agreement or offer is priced. Shared by both entities;
/// filtered through the dotted backend path `pricingModel.model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingModel {
    Fixed,
    PerKm,
    PerDay,
}

impl PricingModel {
    pub fn key(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "FIXED",
            PricingModel::PerKm => "PER_KM",
            PricingModel::PerDay => "PER_DAY",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PricingModel::Fixed => "Fixed price",
            PricingModel::PerKm => "Per kilometre",
            PricingModel::PerDay => "Per day",
        }
    }

    pub fn all() -> &'static [PricingModel] {
        &[PricingModel::Fixed, PricingModel::PerKm, PricingModel::PerDay]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_km_uses_the_backend_key() {
        assert_eq!(PricingModel::PerKm.key(), "PER_KM");
        assert_eq!(
            serde_json::to_string(&PricingModel::PerKm).unwrap(),
            r#""PER_KM""#
        );
        assert_eq!(PricingModel::from_key("PER_KM"), Some(PricingModel::PerKm));
    }
}
