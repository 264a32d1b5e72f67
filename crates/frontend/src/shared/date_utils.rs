/// Форматирование дат и сумм для таблиц
///
/// Даты приходят строками (`YYYY-MM-DD` или ISO timestamp), показываем `DD.MM.YYYY`.
use contracts::shared::dates::parse_date_prefix;

/// Format a date or timestamp string to DD.MM.YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    parse_date_prefix(date_str)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Same as [`format_date`] for optional values; missing dates render as a dash
pub fn format_optional_date(date_str: Option<&str>) -> String {
    match date_str.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => format_date(s),
        None => "—".to_string(),
    }
}

/// Rupee amount with two decimals: 1234.5 -> "Rs. 1,234.50"
pub fn format_money(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_part: String = grouped.chars().rev().collect();
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}Rs. {}.{}", sign, int_part, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional_date(Some("  ")), "—");
        assert_eq!(format_optional_date(None), "—");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "Rs. 0.00");
        assert_eq!(format_money(1234.5), "Rs. 1,234.50");
        assert_eq!(format_money(1234567.891), "Rs. 1,234,567.89");
        assert_eq!(format_money(-50.0), "-Rs. 50.00");
    }
}
