use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub brand: BrandConfig,
    pub layout: LayoutConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrandConfig {
    pub name: String,
    pub fallback_title: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LayoutConfig {
    pub mobile_breakpoint_px: f64,
    pub navbar_scroll_threshold_px: f64,
    pub notification_count: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub room_status_page_size: usize,
    pub upcoming_bookings_page_size: usize,
}

/// Configuration compiled into the bundle.
pub const DEFAULT_CONFIG: &str = r#"
[brand]
name = "Cosmic"
fallback_title = "Cosmic Admin"

[layout]
mobile_breakpoint_px = 768.0
navbar_scroll_threshold_px = 50.0
notification_count = 3

[dashboard]
room_status_page_size = 3
upcoming_bookings_page_size = 4
"#;

/// Parse a configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    if config.layout.mobile_breakpoint_px <= 0.0 {
        anyhow::bail!("layout.mobile_breakpoint_px must be positive");
    }
    Ok(config)
}

/// Load the embedded configuration.
pub fn load_config() -> anyhow::Result<AppConfig> {
    parse_config(DEFAULT_CONFIG)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig {
                name: "Cosmic".to_string(),
                fallback_title: "Cosmic Admin".to_string(),
            },
            layout: LayoutConfig {
                mobile_breakpoint_px: super::viewport::MOBILE_BREAKPOINT_PX,
                navbar_scroll_threshold_px: super::viewport::NAVBAR_SCROLL_THRESHOLD_PX,
                notification_count: 3,
            },
            dashboard: DashboardConfig {
                room_status_page_size: 3,
                upcoming_bookings_page_size: 4,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.brand.name, "Cosmic");
        assert_eq!(config.layout.mobile_breakpoint_px, 768.0);
        assert_eq!(config.dashboard.room_status_page_size, 3);
        assert_eq!(config.dashboard.upcoming_bookings_page_size, 4);
    }

    #[test]
    fn test_embedded_matches_default() {
        assert_eq!(load_config().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(parse_config("[brand]\nname = 1").is_err());
        let bad = DEFAULT_CONFIG.replace("768.0", "0.0");
        assert!(parse_config(&bad).is_err());
    }
}
