use super::seed::CONTROLLERS;
use crate::enums::{Condition, ConsoleType, EquipmentStatus};
use crate::shared::filter::{Choice, NoTab, Predicate, Resource};
use crate::shared::query::StaticRegistry;
use crate::shared::stats::Classified;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Gamepad in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    pub id: u32,
    pub controller_id: String,
    pub controller_name: String,
    pub controller_type: ConsoleType,
    pub status: EquipmentStatus,
    pub condition: Condition,
    /// Charge in percent.
    pub battery_level: Option<u8>,
    pub room_assigned: Option<String>,
    pub purchase_date: String,
    pub last_maintenance: Option<String>,
    pub hours_used: u32,
    pub serial_number: String,
}

/// Colour band of the battery gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryBand {
    Full,
    Good,
    Low,
    Critical,
}

impl BatteryBand {
    pub fn for_level(level: u8) -> Self {
        match level {
            80..=u8::MAX => BatteryBand::Full,
            50..=79 => BatteryBand::Good,
            20..=49 => BatteryBand::Low,
            _ => BatteryBand::Critical,
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            BatteryBand::Full => "emerald",
            BatteryBand::Good => "yellow",
            BatteryBand::Low => "orange",
            BatteryBand::Critical => "red",
        }
    }
}

impl Controller {
    pub fn battery_band(&self) -> Option<BatteryBand> {
        self.battery_level.map(BatteryBand::for_level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerFilters {
    pub status: Choice<EquipmentStatus>,
}

impl Predicate<Controller> for ControllerFilters {
    fn admits(&self, record: &Controller) -> bool {
        self.status.admits(&record.status)
    }
}

impl Resource for Controller {
    type Tab = NoTab;
    type Filters = ControllerFilters;

    const RESOURCE: &'static str = "controller";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.controller_id)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.controller_id, &self.controller_name, &self.serial_number]
    }
}

impl Classified for Controller {
    type Kind = ConsoleType;
    type Status = EquipmentStatus;

    fn kind(&self) -> ConsoleType {
        self.controller_type
    }

    fn status(&self) -> EquipmentStatus {
        self.status
    }
}

pub fn registry() -> StaticRegistry<Controller> {
    StaticRegistry::new(CONTROLLERS.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_console::hardware_stats;
    use crate::shared::filter::{filter_records, ListQuery};
    use std::collections::HashSet;

    fn all() -> &'static [Controller] {
        registry().records()
    }

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 12);
        let ids: HashSet<Cow<'_, str>> = all().iter().map(|c| c.record_id()).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_battery_band() {
        assert_eq!(BatteryBand::for_level(100), BatteryBand::Full);
        assert_eq!(BatteryBand::for_level(80), BatteryBand::Full);
        assert_eq!(BatteryBand::for_level(79), BatteryBand::Good);
        assert_eq!(BatteryBand::for_level(50), BatteryBand::Good);
        assert_eq!(BatteryBand::for_level(45), BatteryBand::Low);
        assert_eq!(BatteryBand::for_level(20), BatteryBand::Low);
        assert_eq!(BatteryBand::for_level(0), BatteryBand::Critical);
    }

    #[test]
    fn test_status_filter() {
        let query = ListQuery::<Controller>::new().with_filters(ControllerFilters {
            status: Choice::Only(EquipmentStatus::Maintenance),
        });
        let ids: Vec<String> = filter_records(all(), &query)
            .into_iter()
            .map(|c| c.controller_id)
            .collect();
        assert_eq!(ids, vec!["PS4-CTRL-003", "PS5-CTRL-004"]);
    }

    #[test]
    fn test_search_by_name() {
        let result = filter_records(all(), &ListQuery::<Controller>::new().with_search("dualsense"));
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_controller_stats() {
        let stats = hardware_stats(all());
        assert_eq!(stats[0].change, "3/7 units");
        assert_eq!(stats[1].change, "3/5 units");
        assert_eq!(stats[2].value, "2");
        assert_eq!(stats[3].value, "1");
    }
}
