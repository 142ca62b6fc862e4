use serde::{Deserialize, Serialize};

/// Direction of the change line under a stat value (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increase,
    Decrease,
    Neutral,
}

/// Colour family of a stat card's icon badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Blue,
    Purple,
    Orange,
    Emerald,
    Red,
    Gray,
}

impl Accent {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Emerald => "emerald",
            Accent::Red => "red",
            Accent::Gray => "gray",
        }
    }
}

/// One stat card: title, main value and a change line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub icon: String,
    pub accent: Accent,
}

impl StatSummary {
    pub fn new(
        title: &str,
        value: impl ToString,
        change: impl Into<String>,
        trend: Trend,
        icon: &str,
        accent: Accent,
    ) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            change: change.into(),
            trend,
            icon: icon.to_string(),
            accent,
        }
    }
}
