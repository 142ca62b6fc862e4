//! Viewport rules for the responsive layout.

/// Widths strictly below this are laid out for phones.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll offset under which the mobile navbar always stays visible.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_mobile_width(width: f64, breakpoint: f64) -> bool {
    width < breakpoint
}

/// Navbar visibility after a scroll from `previous` to `current`.
///
/// On desktop the navbar never hides. On mobile it hides while scrolling
/// down past `threshold` and comes back on any upward scroll.
pub fn navbar_visible(previous: f64, current: f64, is_mobile: bool, threshold: f64) -> bool {
    if !is_mobile || current <= threshold {
        return true;
    }
    current <= previous
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(is_mobile_width(767.0, MOBILE_BREAKPOINT_PX));
        assert!(!is_mobile_width(768.0, MOBILE_BREAKPOINT_PX));
        assert!(!is_mobile_width(1440.0, MOBILE_BREAKPOINT_PX));
    }

    #[test]
    fn test_navbar_desktop_always_visible() {
        assert!(navbar_visible(100.0, 900.0, false, NAVBAR_SCROLL_THRESHOLD_PX));
    }

    #[test]
    fn test_navbar_mobile() {
        let t = NAVBAR_SCROLL_THRESHOLD_PX;
        assert!(navbar_visible(0.0, 40.0, true, t));
        assert!(!navbar_visible(60.0, 120.0, true, t));
        assert!(navbar_visible(120.0, 80.0, true, t));
        assert!(navbar_visible(300.0, 10.0, true, t));
    }
}
