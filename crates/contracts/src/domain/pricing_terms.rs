use serde::{Deserialize, Serialize};

use crate::enums::PricingModel;

/// Nested pricing block shared by rental agreements and offers.
///
/// Filtered on the backend through the dotted path
/// `pricingModel.model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTerms {
    pub model: PricingModel,
    /// Rate in minor units, per unit of the model (trip, km or day).
    pub rate: i64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_model_serializes_by_key() {
        let terms = PricingTerms {
            model: PricingModel::PerDay,
            rate: 4_500,
            currency: "EUR".to_string(),
        };
        let json = serde_json::to_value(&terms).unwrap();
        assert_eq!(json["model"], "PER_DAY");
        assert_eq!(json["rate"], 4_500);
    }
}
