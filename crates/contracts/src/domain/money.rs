/// Render an integer minor-unit amount (cents) as `1 234.56`.
///
/// The stored value is never mutated for display; this is a pure
/// read-time transform.
pub fn format_minor_units(amount: i64) -> String {
    let negative = amount < 0;
    let absolute = amount.unsigned_abs();
    let units = absolute / 100;
    let cents = absolute % 100;

    let digits = units.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let units: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, units, cents)
}

/// Minor units with a currency code suffix, e.g. `1 234.56 EUR`.
pub fn format_minor_units_with_currency(amount: i64, currency: &str) -> String {
    format!("{} {}", format_minor_units(amount), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_pads_cents() {
        assert_eq!(format_minor_units(123_456_789), "1 234 567.89");
        assert_eq!(format_minor_units(5), "0.05");
        assert_eq!(format_minor_units(100), "1.00");
    }

    #[test]
    fn negative_amounts_keep_a_single_sign() {
        assert_eq!(format_minor_units(-123_450), "-1 234.50");
    }

    #[test]
    fn currency_suffix() {
        assert_eq!(
            format_minor_units_with_currency(9_900, "EUR"),
            "99.00 EUR"
        );
    }
}
