use super::seed::CONSOLES;
use crate::enums::{Condition, ConsoleType, EquipmentStatus};
use crate::shared::filter::{Choice, Predicate, Resource, TabBucket};
use crate::shared::indicators::{Accent, StatSummary, Trend};
use crate::shared::query::StaticRegistry;
use crate::shared::stats::{count_matching, Classified, UnitRatio};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Console unit in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConsole {
    pub id: u32,
    pub console_id: String,
    pub console_name: String,
    pub console_type: ConsoleType,
    pub status: EquipmentStatus,
    pub condition: Condition,
    pub room_assigned: Option<String>,
    pub purchase_date: String,
    pub last_maintenance: Option<String>,
    pub hours_used: u32,
    pub serial_number: String,
}

/// Tabs split consoles by generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTab {
    #[default]
    All,
    Ps4,
    Ps5,
}

impl ConsoleTab {
    /// Choosing "All" in the status filter also resets the tab.
    pub fn after_status_change(self, status: Choice<EquipmentStatus>) -> Self {
        if status.is_all() {
            ConsoleTab::All
        } else {
            self
        }
    }
}

impl TabBucket for ConsoleTab {
    type Key = ConsoleType;

    fn tabs() -> &'static [Self] {
        &[ConsoleTab::All, ConsoleTab::Ps4, ConsoleTab::Ps5]
    }

    fn label(&self) -> &'static str {
        match self {
            ConsoleTab::All => "All",
            ConsoleTab::Ps4 => "PS4",
            ConsoleTab::Ps5 => "PS5",
        }
    }

    fn members(&self) -> Option<&'static [ConsoleType]> {
        match self {
            ConsoleTab::All => None,
            ConsoleTab::Ps4 => Some(&[ConsoleType::Ps4]),
            ConsoleTab::Ps5 => Some(&[ConsoleType::Ps5]),
        }
    }
}

impl Predicate<GameConsole> for ConsoleTab {
    fn admits(&self, record: &GameConsole) -> bool {
        self.contains(&record.console_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleFilters {
    pub status: Choice<EquipmentStatus>,
}

impl Predicate<GameConsole> for ConsoleFilters {
    fn admits(&self, record: &GameConsole) -> bool {
        self.status.admits(&record.status)
    }
}

impl Resource for GameConsole {
    type Tab = ConsoleTab;
    type Filters = ConsoleFilters;

    const RESOURCE: &'static str = "console";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.console_id)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.console_id, &self.console_name, &self.serial_number]
    }
}

impl Classified for GameConsole {
    type Kind = ConsoleType;
    type Status = EquipmentStatus;

    fn kind(&self) -> ConsoleType {
        self.console_type
    }

    fn status(&self) -> EquipmentStatus {
        self.status
    }
}

pub fn registry() -> StaticRegistry<GameConsole> {
    StaticRegistry::new(CONSOLES.as_slice())
}

/// Available and needs-attention cards per generation. Shared by the
/// console and controller pages.
pub fn hardware_stats<R>(records: &[R]) -> Vec<StatSummary>
where
    R: Classified<Kind = ConsoleType, Status = EquipmentStatus>,
{
    let available = |t: ConsoleType| UnitRatio::of_kind(records, t, &[EquipmentStatus::Available]);
    let attention = |t: ConsoleType| {
        count_matching(records, Some(t), EquipmentStatus::NEEDS_ATTENTION)
    };
    let ps4 = available(ConsoleType::Ps4);
    let ps5 = available(ConsoleType::Ps5);

    vec![
        StatSummary::new("PS4 Available", ps4.value, ps4.label("units"), Trend::Neutral, "gamepad", Accent::Blue),
        StatSummary::new("PS5 Available", ps5.value, ps5.label("units"), Trend::Neutral, "gamepad", Accent::Purple),
        StatSummary::new("Maintenance PS4", attention(ConsoleType::Ps4), "Requires attention", Trend::Decrease, "wrench", Accent::Red),
        StatSummary::new("Maintenance PS5", attention(ConsoleType::Ps5), "Requires attention", Trend::Decrease, "wrench", Accent::Red),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ClosedSet;
    use crate::shared::filter::{filter_records, ListQuery};

    fn all() -> &'static [GameConsole] {
        registry().records()
    }

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 9);
    }

    #[test]
    fn test_search_by_serial() {
        let result = filter_records(all(), &ListQuery::<GameConsole>::new().with_search("pqr123"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].console_id, "PS5-CON-001");
    }

    #[test]
    fn test_status_all_resets_tab() {
        assert_eq!(ConsoleTab::Ps5.after_status_change(Choice::All), ConsoleTab::All);
        assert_eq!(
            ConsoleTab::Ps5.after_status_change(Choice::Only(EquipmentStatus::Offline)),
            ConsoleTab::Ps5
        );
    }

    #[test]
    fn test_stats_agree_with_filters() {
        for (tab, kind) in [(ConsoleTab::Ps4, ConsoleType::Ps4), (ConsoleTab::Ps5, ConsoleType::Ps5)] {
            for status in EquipmentStatus::all() {
                let query = ListQuery::<GameConsole>::new()
                    .with_tab(tab)
                    .with_filters(ConsoleFilters { status: Choice::Only(status) });
                assert_eq!(
                    count_matching(all(), Some(kind), &[status]),
                    filter_records(all(), &query).len()
                );
            }
        }
    }

    #[test]
    fn test_hardware_stats() {
        let stats = hardware_stats(all());
        assert_eq!(stats[0].change, "2/5 units");
        assert_eq!(stats[1].change, "2/4 units");
        assert_eq!(stats[2].value, "2");
        assert_eq!(stats[3].value, "1");
    }
}
