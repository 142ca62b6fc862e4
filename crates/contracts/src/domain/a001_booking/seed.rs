use super::aggregate::{Booking, BookingStatus};
use crate::enums::RoomType;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn booking(
    id: u32,
    booking_id: &str,
    customer_name: &str,
    room_type: RoomType,
    room_number: &str,
    (start_time, end_time): (&str, &str),
    date: &str,
    status: BookingStatus,
    price: f64,
    contact: (&str, &str),
) -> Booking {
    Booking {
        id,
        booking_id: booking_id.to_string(),
        customer_name: customer_name.to_string(),
        room_type,
        room_number: room_number.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        date: date.to_string(),
        status,
        price,
        duration: "2 hours".to_string(),
        customer_email: Some(contact.0.to_string()),
        customer_phone: Some(contact.1.to_string()),
    }
}

pub(super) static BOOKINGS: Lazy<Vec<Booking>> = Lazy::new(|| {
    use BookingStatus::*;
    use RoomType::*;

    vec![
        booking(1, "BK001", "John Smith", Ps5, "PS5-001", ("2:00 PM", "4:00 PM"), "Today", Active, 50.0, ("john@email.com", "+1 234 567 8900")),
        booking(2, "BK002", "Emma Davis", Ps4, "PS4-002", ("4:30 PM", "6:30 PM"), "Today", Upcoming, 30.0, ("emma@email.com", "+1 234 567 8901")),
        booking(3, "BK003", "Mike Johnson", Vip, "VIP-001", ("7:00 PM", "9:00 PM"), "Today", Upcoming, 100.0, ("mike@email.com", "+1 234 567 8902")),
        booking(4, "BK004", "Lisa Wang", Ps5, "PS5-002", ("11:00 AM", "1:00 PM"), "Yesterday", Completed, 50.0, ("lisa@email.com", "+1 234 567 8903")),
        booking(5, "BK005", "Alex Chen", Ps4, "PS4-001", ("3:00 PM", "5:00 PM"), "Yesterday", Cancelled, 30.0, ("alex@email.com", "+1 234 567 8904")),
        booking(6, "BK006", "Sarah Kim", Vip, "VIP-002", ("9:00 AM", "11:00 AM"), "Yesterday", Missed, 100.0, ("sarah@email.com", "+1 234 567 8905")),
        booking(7, "BK007", "Tom Wilson", Ps5, "PS5-003", ("1:00 PM", "3:00 PM"), "Tomorrow", Upcoming, 50.0, ("tom@email.com", "+1 234 567 8906")),
        booking(8, "BK008", "Nina Rodriguez", Ps4, "PS4-003", ("5:00 PM", "7:00 PM"), "Tomorrow", Upcoming, 30.0, ("nina@email.com", "+1 234 567 8907")),
    ]
});
