//! Row and form payloads of the backend list endpoints.
//!
//! All list rows carry a numeric `id`; the UI derives its stable row
//! key from it. Monetary amounts travel as integer minor units and are
//! divided by 100 only at render time.

pub mod bank_account;
pub mod car;
pub mod driver;
pub mod invoice;
pub mod money;
pub mod offer;
pub mod pricing_terms;
pub mod rental_agreement;
pub mod trip;
