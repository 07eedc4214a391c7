//! Enumerated filter domains.
//!
//! Every enum that feeds a multi-select filter lives here with a fixed
//! key/label table. Filters round-trip by key; labels exist only for
//! rendering.

pub mod agreement;
pub mod car;
pub mod invoice;
pub mod offer;
pub mod pricing;
pub mod trip;

pub use agreement::AgreementStatus;
pub use car::CarStatus;
pub use invoice::InvoiceStatus;
pub use offer::OfferStatus;
pub use pricing::PricingModel;
pub use trip::{TripScope, TripStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_round_trips_by_key() {
        for status in AgreementStatus::all() {
            assert_eq!(AgreementStatus::from_key(status.key()), Some(*status));
        }
        for status in CarStatus::all() {
            assert_eq!(CarStatus::from_key(status.key()), Some(*status));
        }
        for status in InvoiceStatus::all() {
            assert_eq!(InvoiceStatus::from_key(status.key()), Some(*status));
        }
        for status in OfferStatus::all() {
            assert_eq!(OfferStatus::from_key(status.key()), Some(*status));
        }
    }

    #[test]
    fn labels_are_never_valid_keys() {
        assert_eq!(InvoiceStatus::from_key("Paid"), None);
        assert_eq!(CarStatus::from_key("In maintenance"), None);
    }
}
