use crate::domain::a003_room::RoomStatus;
use crate::enums::RoomType;
use crate::shared::filter::{Choice, Predicate, Resource, TabBucket};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One labelled value of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

crate::enums::closed_set! {
    /// Period picker of the revenue chart.
    RevenueRange {
        Last7Days => ("7d", "Last 7 days"),
        Last30Days => ("30d", "Last 30 days"),
        Last3Months => ("3m", "Last 3 months"),
    }
}

crate::enums::closed_set! {
    BookingConfirmation {
        Confirmed => ("confirmed", "Confirmed"),
        Pending => ("pending", "Pending"),
    }
}

crate::enums::closed_set! {
    TransactionStatus {
        Completed => ("completed", "Completed"),
        Pending => ("pending", "Pending"),
        Failed => ("failed", "Failed"),
    }
}

/// Row of the "Upcoming Bookings" widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingBooking {
    pub id: String,
    pub user: String,
    pub room: String,
    pub time: String,
    pub status: BookingConfirmation,
    pub avatar: String,
}

/// Row of the "Recent Transactions" widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user: String,
    pub room: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub time: String,
    pub avatar: String,
}

/// Row of the "Room Status" widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSlot {
    pub id: String,
    pub name: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
}

impl RoomSlot {
    pub fn price_label(&self) -> String {
        format!("${}/hr", self.room_type.hourly_rate())
    }
}

/// The widget always shows one tier; it opens on PS5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomSlotTab {
    Ps4,
    #[default]
    Ps5,
    Vip,
}

impl TabBucket for RoomSlotTab {
    type Key = RoomType;

    fn tabs() -> &'static [Self] {
        &[RoomSlotTab::Ps4, RoomSlotTab::Ps5, RoomSlotTab::Vip]
    }

    fn label(&self) -> &'static str {
        match self {
            RoomSlotTab::Ps4 => "PS4",
            RoomSlotTab::Ps5 => "PS5",
            RoomSlotTab::Vip => "VIP",
        }
    }

    fn members(&self) -> Option<&'static [RoomType]> {
        Some(match self {
            RoomSlotTab::Ps4 => &[RoomType::Ps4],
            RoomSlotTab::Ps5 => &[RoomType::Ps5],
            RoomSlotTab::Vip => &[RoomType::Vip],
        })
    }
}

impl Predicate<RoomSlot> for RoomSlotTab {
    fn admits(&self, record: &RoomSlot) -> bool {
        self.contains(&record.room_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomSlotFilters {
    pub status: Choice<RoomStatus>,
}

impl Predicate<RoomSlot> for RoomSlotFilters {
    fn admits(&self, record: &RoomSlot) -> bool {
        self.status.admits(&record.status)
    }
}

impl Resource for RoomSlot {
    type Tab = RoomSlotTab;
    type Filters = RoomSlotFilters;

    const RESOURCE: &'static str = "room slot";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.id]
    }
}
