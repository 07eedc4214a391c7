//! Tab titles — single source of truth for every tab key.

/// Human-readable title for a tab key. Falls back to the key itself for
/// detail tabs, whose titles are set when they are opened.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "trips" => "Trips",
        "rental_agreements" => "Rental agreements",
        "offers" => "Offers",
        "invoices" => "Invoices",
        "bank_accounts" => "Bank accounts",
        "cars" => "Cars",
        "drivers" => "Drivers",
        _ => "…",
    }
}
