use super::seed::ROOMS;
use crate::domain::a002_rental_unit::RentalSession;
use crate::enums::RoomType;
use crate::shared::filter::{Choice, Predicate, Resource, TabBucket};
use crate::shared::query::StaticRegistry;
use crate::shared::stats::Classified;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

crate::enums::closed_set! {
    RoomStatus {
        Available => ("available", "Available"),
        InUse => ("in_use", "In Use"),
        Maintenance => ("maintenance", "Maintenance"),
    }
}

/// Gaming room with its fixed equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub room_id: String,
    pub room_name: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub hourly_price: f64,
    pub capacity: u32,
    pub session: Option<RentalSession>,
    pub equipment: Vec<String>,
    pub last_maintenance: Option<String>,
}

impl Room {
    pub fn current_user(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.as_str())
    }

    /// `"$15/hr"`
    pub fn price_label(&self) -> String {
        format!("${}/hr", self.hourly_price)
    }
}

/// Tabs split rooms by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomTab {
    #[default]
    All,
    Available,
    InUse,
    Maintenance,
}

impl RoomTab {
    /// Tab that mirrors a status filter choice.
    pub fn for_status(status: Choice<RoomStatus>) -> Self {
        match status {
            Choice::All => RoomTab::All,
            Choice::Only(RoomStatus::Available) => RoomTab::Available,
            Choice::Only(RoomStatus::InUse) => RoomTab::InUse,
            Choice::Only(RoomStatus::Maintenance) => RoomTab::Maintenance,
        }
    }
}

impl TabBucket for RoomTab {
    type Key = RoomStatus;

    fn tabs() -> &'static [Self] {
        &[RoomTab::All, RoomTab::Available, RoomTab::InUse, RoomTab::Maintenance]
    }

    fn label(&self) -> &'static str {
        match self {
            RoomTab::All => "All",
            RoomTab::Available => "Available",
            RoomTab::InUse => "In Use",
            RoomTab::Maintenance => "Maintenance",
        }
    }

    fn members(&self) -> Option<&'static [RoomStatus]> {
        match self {
            RoomTab::All => None,
            RoomTab::Available => Some(&[RoomStatus::Available]),
            RoomTab::InUse => Some(&[RoomStatus::InUse]),
            RoomTab::Maintenance => Some(&[RoomStatus::Maintenance]),
        }
    }
}

impl Predicate<Room> for RoomTab {
    fn admits(&self, record: &Room) -> bool {
        self.contains(&record.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomFilters {
    pub room_type: Choice<RoomType>,
    pub status: Choice<RoomStatus>,
}

impl Predicate<Room> for RoomFilters {
    fn admits(&self, record: &Room) -> bool {
        self.room_type.admits(&record.room_type) && self.status.admits(&record.status)
    }
}

impl Resource for Room {
    type Tab = RoomTab;
    type Filters = RoomFilters;

    const RESOURCE: &'static str = "room";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.room_id)
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.room_id.as_str(), self.room_name.as_str()];
        fields.extend(self.current_user());
        fields
    }
}

impl Classified for Room {
    type Kind = RoomType;
    type Status = RoomStatus;

    fn kind(&self) -> RoomType {
        self.room_type
    }

    fn status(&self) -> RoomStatus {
        self.status
    }
}

pub fn registry() -> StaticRegistry<Room> {
    StaticRegistry::new(ROOMS.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, ListQuery};
    use crate::shared::query::ResourceQuery;
    use crate::shared::stats::count_matching;

    fn all() -> &'static [Room] {
        registry().records()
    }

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 8);
        let vip = registry().get_by_id("VIP-001").unwrap();
        assert_eq!(vip.capacity, 8);
        assert_eq!(vip.equipment.len(), 6);
        assert_eq!(vip.price_label(), "$50/hr");
    }

    #[test]
    fn test_tab_follows_status_filter() {
        assert_eq!(RoomTab::for_status(Choice::Only(RoomStatus::InUse)), RoomTab::InUse);
        assert_eq!(RoomTab::for_status(Choice::All), RoomTab::All);
    }

    #[test]
    fn test_tab_change_keeps_status_filter() {
        let in_use = RoomFilters {
            status: Choice::Only(RoomStatus::InUse),
            ..RoomFilters::default()
        };
        let query = ListQuery::<Room>::new()
            .with_filters(in_use)
            .with_tab(RoomTab::Available);
        assert_eq!(query.filters.status, Choice::Only(RoomStatus::InUse));
        assert!(filter_records(all(), &query).is_empty());
    }

    #[test]
    fn test_maintenance_tab() {
        let query = ListQuery::<Room>::new().with_tab(RoomTab::Maintenance);
        let ids: Vec<String> = filter_records(all(), &query)
            .into_iter()
            .map(|r| r.room_id)
            .collect();
        assert_eq!(ids, vec!["PS4-003", "PS5-003"]);
    }

    #[test]
    fn test_search_current_user_and_name() {
        let by_user = filter_records(all(), &ListQuery::<Room>::new().with_search("mike"));
        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user[0].room_id, "VIP-002");
        let by_name = filter_records(all(), &ListQuery::<Room>::new().with_search("suite"));
        assert_eq!(by_name.len(), 2);
    }

    #[test]
    fn test_type_and_status_combine() {
        let filters = RoomFilters {
            room_type: Choice::Only(RoomType::Ps5),
            status: Choice::Only(RoomStatus::Available),
        };
        let query = ListQuery::<Room>::new().with_filters(filters);
        assert_eq!(filter_records(all(), &query).len(), 1);
        assert_eq!(count_matching(all(), Some(RoomType::Ps5), &[RoomStatus::Available]), 1);
    }
}
