//! Page category constants.
//!
//! Every page declares an HTML `id` of the form `{page_key}--{category}`
//! (e.g. `"a001_booking--list"`) and a `data-page-category` attribute.

/// Record list with tabs, filters and a detail modal.
pub const PAGE_CAT_LIST: &str = "list";

/// Overview page made of widgets and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{page_key}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((key, category)) => !key.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_booking--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_booking"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_booking--"));
    }
}
