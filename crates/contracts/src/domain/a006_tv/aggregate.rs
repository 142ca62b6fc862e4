use super::seed::TELEVISIONS;
use crate::enums::{Condition, EquipmentStatus};
use crate::shared::filter::{Choice, NoTab, Predicate, Resource};
use crate::shared::indicators::{Accent, StatSummary, Trend};
use crate::shared::query::StaticRegistry;
use crate::shared::stats::{Classified, UnitRatio};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

crate::enums::closed_set! {
    TvType {
        Led => ("led", "LED"),
        Oled => ("oled", "OLED"),
        FourK => ("4k", "4K"),
        SmartTv => ("smart_tv", "Smart TV"),
    }
}

/// Display unit installed in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Television {
    pub id: u32,
    pub tv_id: String,
    pub tv_name: String,
    pub tv_type: TvType,
    pub size: String,
    pub status: EquipmentStatus,
    pub condition: Condition,
    pub room_assigned: Option<String>,
    pub purchase_date: String,
    pub last_maintenance: Option<String>,
    pub hours_used: u32,
    pub serial_number: String,
    pub brand: String,
    pub resolution: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TvFilters {
    pub status: Choice<EquipmentStatus>,
}

impl Predicate<Television> for TvFilters {
    fn admits(&self, record: &Television) -> bool {
        self.status.admits(&record.status)
    }
}

impl Resource for Television {
    type Tab = NoTab;
    type Filters = TvFilters;

    const RESOURCE: &'static str = "tv";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.tv_id)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.tv_id, &self.tv_name, &self.serial_number, &self.brand]
    }
}

impl Classified for Television {
    type Kind = TvType;
    type Status = EquipmentStatus;

    fn kind(&self) -> TvType {
        self.tv_type
    }

    fn status(&self) -> EquipmentStatus {
        self.status
    }
}

pub fn registry() -> StaticRegistry<Television> {
    StaticRegistry::new(TELEVISIONS.as_slice())
}

pub fn tv_stats(tvs: &[Television]) -> Vec<StatSummary> {
    let available = UnitRatio::of_all(tvs, &[EquipmentStatus::Available]);
    let in_use = UnitRatio::of_all(tvs, &[EquipmentStatus::InUse]);
    let attention = UnitRatio::of_all(tvs, EquipmentStatus::NEEDS_ATTENTION);

    vec![
        StatSummary::new("Available TVs", available.value, available.label("units"), Trend::Neutral, "tv", Accent::Emerald),
        StatSummary::new("Currently In Use", in_use.value, in_use.label("active"), Trend::Neutral, "monitor", Accent::Blue),
        StatSummary::new("Need Maintenance", attention.value, "Requires attention", Trend::Decrease, "wrench", Accent::Red),
        StatSummary::new("Total TVs", tvs.len(), "All units", Trend::Neutral, "tv", Accent::Purple),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ClosedSet;
    use crate::shared::filter::{filter_records, ListQuery};

    fn all() -> &'static [Television] {
        registry().records()
    }

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 8);
        assert_eq!(TvType::FourK.display_name(), "4K");
        assert_eq!(all()[0].tv_type, TvType::FourK);
    }

    #[test]
    fn test_search_by_brand() {
        let result = filter_records(all(), &ListQuery::<Television>::new().with_search("SONY"));
        assert_eq!(result.len(), 2);
        let lower = filter_records(all(), &ListQuery::<Television>::new().with_search("sony"));
        assert_eq!(result, lower);
    }

    #[test]
    fn test_tv_stats() {
        let stats = tv_stats(all());
        assert_eq!(stats[0].value, "3");
        assert_eq!(stats[0].change, "3/8 units");
        assert_eq!(stats[1].change, "2/8 active");
        assert_eq!(stats[2].value, "3");
        assert_eq!(stats[3].value, "8");
    }
}
