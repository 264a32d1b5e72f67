/// Utilities for date values that travel as strings
///
/// The API returns dates either as `YYYY-MM-DD` or as full ISO timestamps.
use chrono::NaiveDate;

/// Parse the leading `YYYY-MM-DD` part of a date or timestamp string.
/// Example: "2024-03-15T14:02:26.123Z" -> 2024-03-15
pub fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let prefix = trimmed.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Format a date the way `<input type="date">` expects it
pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Normalise a date/timestamp string to `YYYY-MM-DD` for form inputs.
/// Unparseable values become an empty string.
pub fn normalize_input_date(value: &str) -> String {
    parse_date_prefix(value).map(to_input_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_prefix() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date_prefix("2024-03-15"), expected);
        assert_eq!(parse_date_prefix("2024-03-15T14:02:26.123Z"), expected);
        assert_eq!(parse_date_prefix("15.03.2024"), None);
        assert_eq!(parse_date_prefix(""), None);
    }

    #[test]
    fn test_normalize_input_date() {
        assert_eq!(normalize_input_date("2024-12-31T00:00:00.000Z"), "2024-12-31");
        assert_eq!(normalize_input_date("garbage"), "");
    }
}
