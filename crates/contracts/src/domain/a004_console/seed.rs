use super::aggregate::GameConsole;
use crate::enums::{Condition, ConsoleType, EquipmentStatus};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn console(
    id: u32,
    console_id: &str,
    console_name: &str,
    console_type: ConsoleType,
    status: EquipmentStatus,
    condition: Condition,
    room: &str,
    (purchase_date, last_maintenance): (&str, &str),
    hours_used: u32,
    serial_number: &str,
) -> GameConsole {
    GameConsole {
        id,
        console_id: console_id.to_string(),
        console_name: console_name.to_string(),
        console_type,
        status,
        condition,
        room_assigned: Some(room.to_string()),
        purchase_date: purchase_date.to_string(),
        last_maintenance: Some(last_maintenance.to_string()),
        hours_used,
        serial_number: serial_number.to_string(),
    }
}

pub(super) static CONSOLES: Lazy<Vec<GameConsole>> = Lazy::new(|| {
    use Condition::*;
    use ConsoleType::*;
    use EquipmentStatus::*;

    vec![
        console(1, "PS4-CON-001", "PlayStation 4 Console A", Ps4, InUse, Good, "PS4-001", ("2023-01-15", "2024-01-10"), 1250, "PS4-ABC123456"),
        console(2, "PS4-CON-002", "PlayStation 4 Console B", Ps4, Available, Excellent, "PS4-002", ("2023-02-20", "2024-01-08"), 980, "PS4-DEF789012"),
        console(3, "PS4-CON-003", "PlayStation 4 Console C", Ps4, Maintenance, Fair, "PS4-003", ("2022-11-10", "2024-01-05"), 1850, "PS4-GHI345678"),
        console(4, "PS4-CON-004", "PlayStation 4 Console D", Ps4, Available, Good, "PS4-004", ("2023-03-05", "2024-01-12"), 750, "PS4-JKL901234"),
        console(5, "PS4-CON-005", "PlayStation 4 Console E", Ps4, Offline, Poor, "PS4-005", ("2022-08-15", "2023-12-20"), 2100, "PS4-MNO567890"),
        console(6, "PS5-CON-001", "PlayStation 5 Console A", Ps5, InUse, Excellent, "PS5-001", ("2023-06-10", "2024-01-14"), 650, "PS5-PQR123456"),
        console(7, "PS5-CON-002", "PlayStation 5 Console B", Ps5, Available, Excellent, "PS5-002", ("2023-07-20", "2024-01-11"), 520, "PS5-STU789012"),
        console(8, "PS5-CON-003", "PlayStation 5 Console C", Ps5, Available, Good, "PS5-003", ("2023-08-15", "2024-01-09"), 480, "PS5-VWX345678"),
        console(9, "PS5-CON-004", "PlayStation 5 Console D", Ps5, Maintenance, Good, "PS5-004", ("2023-09-05", "2024-01-03"), 380, "PS5-YZA901234"),
    ]
});
