use super::aggregate::{Room, RoomStatus};
use crate::domain::a002_rental_unit::RentalSession;
use crate::enums::RoomType;
use once_cell::sync::Lazy;

const PS4_KIT: [&str; 4] = ["PS4 Console", "4 Controllers", "55\" TV", "Sound System"];
const PS5_KIT: [&str; 4] = ["PS5 Console", "4 Controllers", "65\" 4K TV", "Surround Sound"];
const VIP_KIT: [&str; 6] = [
    "PS5 Console",
    "8 Controllers",
    "75\" 4K TV",
    "7.1 Surround Sound",
    "Gaming Chairs",
    "Mini Fridge",
];

fn session(user: &str, start: &str, end: &str, left: &str) -> Option<RentalSession> {
    Some(RentalSession {
        user: user.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        time_left: left.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
fn room(
    id: u32,
    room_id: &str,
    room_name: &str,
    room_type: RoomType,
    status: RoomStatus,
    session: Option<RentalSession>,
    equipment: &[&str],
    last_maintenance: &str,
) -> Room {
    let capacity = if room_type == RoomType::Vip { 8 } else { 4 };
    Room {
        id,
        room_id: room_id.to_string(),
        room_name: room_name.to_string(),
        room_type,
        status,
        hourly_price: room_type.hourly_rate(),
        capacity,
        session,
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
        last_maintenance: Some(last_maintenance.to_string()),
    }
}

pub(super) static ROOMS: Lazy<Vec<Room>> = Lazy::new(|| {
    use RoomStatus::*;
    use RoomType::*;

    let ps4_small_tv = ["PS4 Console", "4 Controllers", "50\" TV", "Sound System"];

    vec![
        room(1, "PS4-001", "PlayStation 4 Room A", Ps4, InUse, session("John Smith", "2:00 PM", "4:00 PM", "1h 23m"), &PS4_KIT, "2024-01-10"),
        room(2, "PS4-002", "PlayStation 4 Room B", Ps4, Available, None, &ps4_small_tv, "2024-01-08"),
        room(3, "PS4-003", "PlayStation 4 Room C", Ps4, Maintenance, None, &PS4_KIT, "2024-01-05"),
        room(4, "PS5-001", "PlayStation 5 Room A", Ps5, Available, None, &PS5_KIT, "2024-01-12"),
        room(5, "PS5-002", "PlayStation 5 Room B", Ps5, InUse, session("Emma Davis", "1:30 PM", "3:30 PM", "45m"), &PS5_KIT, "2024-01-11"),
        room(6, "PS5-003", "PlayStation 5 Room C", Ps5, Maintenance, None, &PS5_KIT, "2024-01-03"),
        room(7, "VIP-001", "VIP Gaming Suite A", Vip, Available, None, &VIP_KIT, "2024-01-14"),
        room(8, "VIP-002", "VIP Gaming Suite B", Vip, InUse, session("Mike Johnson", "3:00 PM", "5:00 PM", "2h 15m"), &VIP_KIT, "2024-01-13"),
    ]
});
