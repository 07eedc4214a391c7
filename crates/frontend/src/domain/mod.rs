pub mod bank_accounts;
pub mod cars;
pub mod drivers;
pub mod invoices;
pub mod offers;
pub mod rental_agreements;
pub mod trips;
