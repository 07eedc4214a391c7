//! Render-time date formatting. Values travel as ISO-8601 and are only
//! reformatted for display, never mutated in state.

use chrono::{DateTime, NaiveDate, Utc};

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_datetime(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d.%m.%Y %H:%M").to_string()
}

pub fn format_optional_date(date: &Option<NaiveDate>) -> String {
    date.as_ref().map(format_date).unwrap_or_else(|| "—".to_string())
}

pub fn format_optional_datetime(timestamp: &Option<DateTime<Utc>>) -> String {
    timestamp
        .as_ref()
        .map(format_datetime)
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_renders_day_first() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15.03.2026");
    }

    #[test]
    fn datetime_keeps_minutes_only() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&ts), "15.03.2026 14:02");
    }

    #[test]
    fn missing_values_render_a_dash() {
        assert_eq!(format_optional_date(&None), "—");
        assert_eq!(format_optional_datetime(&None), "—");
    }
}
