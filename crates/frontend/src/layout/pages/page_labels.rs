//! Page titles, shown in the sidebar and the top bar.

/// Page opened when the URL does not name one.
pub const DEFAULT_PAGE: &str = "d400_overview";

/// Title of the page with the given key, `None` for unknown keys.
pub fn page_label_for_key(key: &str) -> Option<&'static str> {
    let label = match key {
        "d400_overview" => "Dashboard",

        "a001_booking" => "Booking",
        "a002_rental_unit" => "Rent",
        "a003_room" => "Room",
        "a004_console" => "Console",
        "a005_controller" => "Controller",
        "a006_tv" => "TV",
        "a007_food" => "Food",
        "a008_user" => "Users",

        // not built yet, rendered as placeholders
        "transaction" => "Transaction",
        "analysis_report" => "Analysis & Report",
        "settings" => "Settings",

        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(page_label_for_key(DEFAULT_PAGE), Some("Dashboard"));
        assert_eq!(page_label_for_key("a002_rental_unit"), Some("Rent"));
        assert_eq!(page_label_for_key("analysis_report"), Some("Analysis & Report"));
    }

    #[test]
    fn test_unknown_key_has_no_label() {
        assert_eq!(page_label_for_key("a999_unknown"), None);
        assert_eq!(page_label_for_key(""), None);
    }
}
