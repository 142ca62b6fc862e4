use super::aggregate::{RentalSession, RentalUnit, UnitStatus};
use crate::enums::RoomType;
use once_cell::sync::Lazy;

fn idle(id: u32, number: &str, unit_type: RoomType, status: UnitStatus) -> RentalUnit {
    RentalUnit {
        id,
        number: number.to_string(),
        unit_type,
        status,
        session: None,
    }
}

fn busy(id: u32, number: &str, unit_type: RoomType, user: &str, start: &str, end: &str, left: &str) -> RentalUnit {
    RentalUnit {
        id,
        number: number.to_string(),
        unit_type,
        status: UnitStatus::InUse,
        session: Some(RentalSession {
            user: user.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            time_left: left.to_string(),
        }),
    }
}

pub(super) static RENTAL_UNITS: Lazy<Vec<RentalUnit>> = Lazy::new(|| {
    use RoomType::*;
    use UnitStatus::{Available, Offline};

    vec![
        busy(1, "PS4-001", Ps4, "John Smith", "2:00 PM", "4:00 PM", "1h 23m"),
        idle(2, "PS4-002", Ps4, Available),
        idle(3, "PS4-003", Ps4, Offline),
        busy(4, "PS4-004", Ps4, "Emma Davis", "1:30 PM", "3:30 PM", "45m"),
        idle(5, "PS4-005", Ps4, Available),
        busy(6, "PS5-001", Ps5, "Mike Johnson", "3:00 PM", "5:00 PM", "2h 15m"),
        idle(7, "PS5-002", Ps5, Available),
        busy(8, "PS5-003", Ps5, "Lisa Wang", "4:00 PM", "6:00 PM", "3h 8m"),
        idle(9, "PS5-004", Ps5, Offline),
        busy(10, "VIP-001", Vip, "Alex Chen", "6:00 PM", "8:00 PM", "4h 32m"),
        idle(11, "VIP-002", Vip, Available),
        idle(12, "VIP-003", Vip, Available),
        busy(13, "PS4-006", Ps4, "Sarah Kim", "5:00 PM", "7:00 PM", "5h 12m"),
        idle(14, "PS5-005", Ps5, Available),
        idle(15, "VIP-004", Vip, Offline),
    ]
});
