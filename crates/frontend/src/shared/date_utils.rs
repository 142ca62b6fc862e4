/// Utilities for date formatting
use chrono::NaiveDate;

/// Format an ISO date as "Jan 10, 2024".
/// Anything that is not a valid `YYYY-MM-DD` prefix is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Same as [`format_date`], with "Never" for a missing date.
pub fn format_optional_date(date_str: Option<&str>) -> String {
    date_str.map(format_date).unwrap_or_else(|| "Never".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-10"), "Jan 10, 2024");
        assert_eq!(format_date("2023-12-01"), "Dec 1, 2023");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "Mar 15, 2024");
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(format_optional_date(None), "Never");
        assert_eq!(format_optional_date(Some("2024-02-05")), "Feb 5, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-13-45"), "2024-13-45");
    }
}
