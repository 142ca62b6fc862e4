use super::seed::RENTAL_UNITS;
use crate::enums::RoomType;
use crate::shared::filter::{Choice, Predicate, Resource, TabBucket};
use crate::shared::indicators::{Accent, StatSummary, Trend};
use crate::shared::query::StaticRegistry;
use crate::shared::stats::{Classified, UnitRatio};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

crate::enums::closed_set! {
    UnitStatus {
        Available => ("available", "Available"),
        InUse => ("in_use", "In Use"),
        Offline => ("offline", "Offline"),
    }
}

/// Current rental session on a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalSession {
    pub user: String,
    pub start_time: String,
    pub end_time: String,
    /// Display string, not a live countdown.
    pub time_left: String,
}

/// A rentable PlayStation station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalUnit {
    pub id: u32,
    pub number: String,
    pub unit_type: RoomType,
    pub status: UnitStatus,
    pub session: Option<RentalSession>,
}

impl RentalUnit {
    pub fn user(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.as_str())
    }
}

/// Tabs split units by tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RentalTab {
    #[default]
    All,
    Ps4,
    Ps5,
    Vip,
}

impl TabBucket for RentalTab {
    type Key = RoomType;

    fn tabs() -> &'static [Self] {
        &[RentalTab::All, RentalTab::Ps4, RentalTab::Ps5, RentalTab::Vip]
    }

    fn label(&self) -> &'static str {
        match self {
            RentalTab::All => "All",
            RentalTab::Ps4 => "PS4",
            RentalTab::Ps5 => "PS5",
            RentalTab::Vip => "VIP",
        }
    }

    fn members(&self) -> Option<&'static [RoomType]> {
        match self {
            RentalTab::All => None,
            RentalTab::Ps4 => Some(&[RoomType::Ps4]),
            RentalTab::Ps5 => Some(&[RoomType::Ps5]),
            RentalTab::Vip => Some(&[RoomType::Vip]),
        }
    }
}

impl Predicate<RentalUnit> for RentalTab {
    fn admits(&self, record: &RentalUnit) -> bool {
        self.contains(&record.unit_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RentalFilters {
    pub status: Choice<UnitStatus>,
}

impl Predicate<RentalUnit> for RentalFilters {
    fn admits(&self, record: &RentalUnit) -> bool {
        self.status.admits(&record.status)
    }
}

impl Resource for RentalUnit {
    type Tab = RentalTab;
    type Filters = RentalFilters;

    const RESOURCE: &'static str = "rental unit";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.number)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.number.as_str()];
        fields.extend(self.user());
        fields
    }
}

impl Classified for RentalUnit {
    type Kind = RoomType;
    type Status = UnitStatus;

    fn kind(&self) -> RoomType {
        self.unit_type
    }

    fn status(&self) -> UnitStatus {
        self.status
    }
}

pub fn registry() -> StaticRegistry<RentalUnit> {
    StaticRegistry::new(RENTAL_UNITS.as_slice())
}

/// Bookings made today; a fixed figure until bookings carry real dates.
pub const BOOKINGS_TODAY: u32 = 23;

/// Stat cards above the rentals grid.
pub fn rental_stats(units: &[RentalUnit]) -> Vec<StatSummary> {
    let ratio = |t: RoomType| UnitRatio::of_kind(units, t, &[UnitStatus::Available]);
    let ps4 = ratio(RoomType::Ps4);
    let ps5 = ratio(RoomType::Ps5);
    let vip = ratio(RoomType::Vip);

    vec![
        StatSummary::new("PS4 Available", ps4.value, ps4.label("units"), Trend::Neutral, "gamepad", Accent::Blue),
        StatSummary::new("PS5 Available", ps5.value, ps5.label("units"), Trend::Neutral, "gamepad", Accent::Purple),
        StatSummary::new("VIP Available", vip.value, vip.label("units"), Trend::Neutral, "crown", Accent::Orange),
        StatSummary::new("Bookings Today", BOOKINGS_TODAY, "+8.2%", Trend::Increase, "calendar", Accent::Emerald),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ClosedSet;
    use crate::shared::filter::{filter_records, ListQuery};
    use crate::shared::stats::count_matching;
    use std::collections::HashSet;

    fn all() -> &'static [RentalUnit] {
        registry().records()
    }

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 15);
        let ids: HashSet<Cow<'_, str>> = all().iter().map(|u| u.record_id()).collect();
        assert_eq!(ids.len(), 15);
        assert!(all()
            .iter()
            .all(|u| (u.status == UnitStatus::InUse) == u.session.is_some()));
    }

    #[test]
    fn test_tab_by_type() {
        let ps4 = filter_records(all(), &ListQuery::<RentalUnit>::new().with_tab(RentalTab::Ps4));
        assert_eq!(ps4.len(), 6);
        assert!(ps4.iter().all(|u| u.unit_type == RoomType::Ps4));
    }

    #[test]
    fn test_search_matches_user() {
        let result = filter_records(all(), &ListQuery::<RentalUnit>::new().with_search("emma"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].number, "PS4-004");
    }

    #[test]
    fn test_stats_agree_with_filters() {
        for (tab, kind) in [
            (RentalTab::Ps4, RoomType::Ps4),
            (RentalTab::Ps5, RoomType::Ps5),
            (RentalTab::Vip, RoomType::Vip),
        ] {
            for status in UnitStatus::all() {
                let query = ListQuery::<RentalUnit>::new()
                    .with_tab(tab)
                    .with_filters(RentalFilters { status: Choice::Only(status) });
                assert_eq!(
                    count_matching(all(), Some(kind), &[status]),
                    filter_records(all(), &query).len()
                );
            }
        }
    }

    #[test]
    fn test_rental_stats() {
        let stats = rental_stats(all());
        assert_eq!(stats[0].value, "2");
        assert_eq!(stats[0].change, "2/6 units");
        assert_eq!(stats[1].change, "2/5 units");
        assert_eq!(stats[2].change, "2/4 units");
        assert_eq!(stats[3].value, "23");
    }
}
