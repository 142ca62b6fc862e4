//! Number formatting for tables and cards.

/// Inserts a comma every three digits of the integer part.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Dollar amount with two decimals: `$1,250.00`.
pub fn format_money(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, format_thousands(cents / 100), cents % 100)
}

/// Hour counter: `1,245h`.
pub fn format_hours(hours: u32) -> String {
    format!("{}h", format_thousands(u64::from(hours)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(8.5), "$8.50");
        assert_eq!(format_money(1250.0), "$1,250.00");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-15.0), "-$15.00");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(1245), "1,245h");
        assert_eq!(format_hours(86), "86h");
    }
}
