use super::dto::{
    BookingConfirmation, ChartPoint, RevenueRange, RoomSlot, Transaction, TransactionStatus,
    UpcomingBooking,
};
use crate::domain::a003_room::RoomStatus;
use crate::enums::RoomType;
use crate::shared::indicators::{Accent, StatSummary, Trend};
use crate::shared::stats::UnitRatio;
use once_cell::sync::Lazy;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKLY_REVENUE: [f64; 7] = [2400.0, 1398.0, 9800.0, 3908.0, 4800.0, 3800.0, 4300.0];
const WEEKLY_ORDERS: [f64; 7] = [45.0, 32.0, 78.0, 56.0, 89.0, 124.0, 98.0];

fn series(values: &[f64; 7]) -> Vec<ChartPoint> {
    WEEKDAYS
        .iter()
        .zip(values.iter())
        .map(|(day, value)| ChartPoint {
            label: day.to_string(),
            value: *value,
        })
        .collect()
}

/// Revenue bars. Only the weekly series is recorded, so every range shows it.
pub fn revenue_series(_range: RevenueRange) -> Vec<ChartPoint> {
    series(&WEEKLY_REVENUE)
}

/// "Total Orders by Customers" line.
pub fn customer_activity() -> Vec<ChartPoint> {
    series(&WEEKLY_ORDERS)
}

/// Headline cards of the overview page.
pub fn overview_stats() -> Vec<StatSummary> {
    let rooms = UnitRatio::new(12, 18);
    let controllers = UnitRatio::new(34, 40);
    vec![
        StatSummary::new(
            "Daily Revenue",
            "$2,847",
            "+12.5%",
            Trend::Increase,
            "credit-card",
            Accent::Emerald,
        ),
        StatSummary::new(
            "Today's Bookings",
            23,
            "+8.2%",
            Trend::Increase,
            "calendar",
            Accent::Blue,
        ),
        StatSummary::new(
            "Active Rooms",
            format!("{}/{}", rooms.value, rooms.total),
            format!("{}% occupied", rooms.percent()),
            Trend::Neutral,
            "home",
            Accent::Purple,
        ),
        StatSummary::new(
            "Controllers Ready",
            format!("{}/{}", controllers.value, controllers.total),
            format!("{} in maintenance", controllers.total - controllers.value),
            Trend::Decrease,
            "gamepad",
            Accent::Orange,
        ),
    ]
}

fn slot(id: &str, name: &str, room_type: RoomType, status: RoomStatus) -> RoomSlot {
    RoomSlot {
        id: id.to_string(),
        name: name.to_string(),
        room_type,
        status,
    }
}

static ROOM_SLOTS: Lazy<Vec<RoomSlot>> = Lazy::new(|| {
    use RoomStatus::*;
    use RoomType::*;

    vec![
        slot("PS4-001", "PlayStation 4 Room A", Ps4, Available),
        slot("PS4-002", "PlayStation 4 Room B", Ps4, InUse),
        slot("PS4-003", "PlayStation 4 Room C", Ps4, Maintenance),
        slot("PS4-004", "PlayStation 4 Room D", Ps4, Available),
        slot("PS4-005", "PlayStation 4 Room E", Ps4, InUse),
        slot("PS5-001", "PlayStation 5 Room A", Ps5, Available),
        slot("PS5-002", "PlayStation 5 Room B", Ps5, InUse),
        slot("PS5-003", "PlayStation 5 Room C", Ps5, Maintenance),
        slot("PS5-004", "PlayStation 5 Room D", Ps5, Available),
        slot("VIP-001", "VIP Gaming Suite A", Vip, Available),
        slot("VIP-002", "VIP Gaming Suite B", Vip, InUse),
        slot("VIP-003", "VIP Gaming Suite C", Vip, Available),
    ]
});

pub fn room_slots() -> &'static [RoomSlot] {
    ROOM_SLOTS.as_slice()
}

fn upcoming(id: u32, user: &str, room: &str, time: &str, status: BookingConfirmation) -> UpcomingBooking {
    UpcomingBooking {
        id: id.to_string(),
        user: user.to_string(),
        room: room.to_string(),
        time: time.to_string(),
        status,
        avatar: crate::domain::a008_user::initials(user),
    }
}

static UPCOMING: Lazy<Vec<UpcomingBooking>> = Lazy::new(|| {
    use BookingConfirmation::*;

    vec![
        upcoming(1, "John Smith", "PS5-001", "2:00 PM - 4:00 PM", Confirmed),
        upcoming(2, "Emma Davis", "PS4-002", "4:30 PM - 6:30 PM", Pending),
        upcoming(3, "Mike Johnson", "PS5-003", "7:00 PM - 9:00 PM", Confirmed),
        upcoming(4, "Lisa Wang", "VIP-001", "9:30 PM - 11:30 PM", Confirmed),
        upcoming(5, "Alex Chen", "PS5-002", "11:00 AM - 1:00 PM", Pending),
        upcoming(6, "Sarah Johnson", "PS4-003", "1:30 PM - 3:30 PM", Confirmed),
        upcoming(7, "Tom Wilson", "VIP-002", "8:00 PM - 10:00 PM", Pending),
        upcoming(8, "Nina Rodriguez", "PS5-004", "3:00 PM - 5:00 PM", Confirmed),
    ]
});

pub fn upcoming_bookings() -> &'static [UpcomingBooking] {
    UPCOMING.as_slice()
}

fn transaction(id: u32, user: &str, room: &str, amount: f64, status: TransactionStatus, time: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        user: user.to_string(),
        room: room.to_string(),
        amount,
        status,
        time: time.to_string(),
        avatar: crate::domain::a008_user::initials(user),
    }
}

static TRANSACTIONS: Lazy<Vec<Transaction>> = Lazy::new(|| {
    use TransactionStatus::*;

    vec![
        transaction(1, "Alex Chen", "PS5-001", 25.0, Completed, "2 min ago"),
        transaction(2, "Maria Garcia", "PS4-002", 18.0, Pending, "15 min ago"),
        transaction(3, "James Wilson", "VIP-001", 50.0, Completed, "32 min ago"),
        transaction(4, "Sarah Kim", "PS5-002", 25.0, Completed, "1 hour ago"),
        transaction(5, "David Brown", "PS4-001", 20.0, Failed, "2 hours ago"),
        transaction(6, "Emma Davis", "VIP-002", 50.0, Completed, "3 hours ago"),
    ]
});

pub fn recent_transactions() -> &'static [Transaction] {
    TRANSACTIONS.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_overview::{RoomSlotFilters, RoomSlotTab};
    use crate::shared::filter::{filter_records, Choice, ListQuery};
    use crate::shared::pagination::paginate;

    #[test]
    fn test_room_slots_default_to_ps5() {
        let query = ListQuery::<RoomSlot>::new();
        assert_eq!(query.tab, RoomSlotTab::Ps5);

        let rows = filter_records(room_slots(), &query);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.room_type == RoomType::Ps5));

        let window = paginate(rows.len(), 1, 3);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.slice(&rows).len(), 3);
    }

    #[test]
    fn test_room_slots_status_and_search() {
        let query = ListQuery::<RoomSlot>::new()
            .with_tab(RoomSlotTab::Ps4)
            .with_filters(RoomSlotFilters {
                status: Choice::Only(RoomStatus::Available),
            });
        let rows = filter_records(room_slots(), &query);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["PS4-001", "PS4-004"]);

        let query = ListQuery::<RoomSlot>::new()
            .with_tab(RoomSlotTab::Vip)
            .with_search("suite b");
        assert_eq!(filter_records(room_slots(), &query).len(), 1);
    }

    #[test]
    fn test_room_slot_price_follows_tier() {
        assert_eq!(room_slots()[0].price_label(), "$15/hr");
        assert_eq!(room_slots()[11].price_label(), "$50/hr");
    }

    #[test]
    fn test_upcoming_bookings_paginate_by_four() {
        let window = paginate(upcoming_bookings().len(), 2, 4);
        assert_eq!(window.total_pages, 2);
        let page = window.slice(upcoming_bookings());
        assert_eq!(page[0].user, "Alex Chen");
        assert_eq!(page[1].avatar, "SJ");
    }

    #[test]
    fn test_chart_series() {
        let revenue = revenue_series(RevenueRange::Last7Days);
        assert_eq!(revenue.len(), 7);
        assert_eq!(revenue[2].label, "Wed");
        assert_eq!(revenue[2].value, 9800.0);
        assert_eq!(revenue_series(RevenueRange::Last3Months), revenue);
        assert_eq!(customer_activity()[5].value, 124.0);
    }

    #[test]
    fn test_overview_stats() {
        let stats = overview_stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[2].value, "12/18");
        assert_eq!(stats[2].change, "67% occupied");
        assert_eq!(stats[3].change, "6 in maintenance");
    }
}
