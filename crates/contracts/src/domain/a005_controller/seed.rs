use super::aggregate::Controller;
use crate::enums::{Condition, ConsoleType, EquipmentStatus};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn controller(
    id: u32,
    controller_id: &str,
    controller_name: &str,
    controller_type: ConsoleType,
    status: EquipmentStatus,
    condition: Condition,
    battery_level: u8,
    room: &str,
    (purchase_date, last_maintenance): (&str, &str),
    hours_used: u32,
    serial_number: &str,
) -> Controller {
    Controller {
        id,
        controller_id: controller_id.to_string(),
        controller_name: controller_name.to_string(),
        controller_type,
        status,
        condition,
        battery_level: Some(battery_level),
        room_assigned: Some(room.to_string()),
        purchase_date: purchase_date.to_string(),
        last_maintenance: Some(last_maintenance.to_string()),
        hours_used,
        serial_number: serial_number.to_string(),
    }
}

pub(super) static CONTROLLERS: Lazy<Vec<Controller>> = Lazy::new(|| {
    use Condition::*;
    use ConsoleType::*;
    use EquipmentStatus::*;

    vec![
        controller(1, "PS4-CTRL-001", "PS4 Controller A1", Ps4, InUse, Good, 85, "PS4-001", ("2023-01-15", "2024-01-10"), 850, "PS4-CTRL-ABC123"),
        controller(2, "PS4-CTRL-002", "PS4 Controller A2", Ps4, Available, Excellent, 100, "PS4-001", ("2023-01-15", "2024-01-08"), 720, "PS4-CTRL-DEF456"),
        controller(3, "PS4-CTRL-003", "PS4 Controller B1", Ps4, Maintenance, Fair, 0, "PS4-002", ("2022-11-10", "2024-01-05"), 1250, "PS4-CTRL-GHI789"),
        controller(4, "PS4-CTRL-004", "PS4 Controller B2", Ps4, Available, Good, 92, "PS4-002", ("2023-03-05", "2024-01-12"), 650, "PS4-CTRL-JKL012"),
        controller(5, "PS4-CTRL-005", "PS4 Controller C1", Ps4, Offline, Poor, 0, "PS4-003", ("2022-08-15", "2023-12-20"), 1850, "PS4-CTRL-MNO345"),
        controller(6, "PS5-CTRL-001", "PS5 DualSense A1", Ps5, InUse, Excellent, 78, "PS5-001", ("2023-06-10", "2024-01-14"), 450, "PS5-CTRL-PQR678"),
        controller(7, "PS5-CTRL-002", "PS5 DualSense A2", Ps5, Available, Excellent, 95, "PS5-001", ("2023-06-10", "2024-01-11"), 380, "PS5-CTRL-STU901"),
        controller(8, "PS5-CTRL-003", "PS5 DualSense B1", Ps5, Available, Good, 88, "PS5-002", ("2023-07-20", "2024-01-09"), 320, "PS5-CTRL-VWX234"),
        controller(9, "PS5-CTRL-004", "PS5 DualSense B2", Ps5, Maintenance, Good, 45, "PS5-002", ("2023-07-20", "2024-01-03"), 280, "PS5-CTRL-YZA567"),
        controller(10, "PS4-CTRL-006", "PS4 Controller D1", Ps4, Available, Excellent, 100, "PS4-004", ("2023-09-05", "2024-01-15"), 420, "PS4-CTRL-BCD890"),
        controller(11, "PS5-CTRL-005", "PS5 DualSense C1", Ps5, Available, Excellent, 92, "PS5-003", ("2023-08-15", "2024-01-13"), 250, "PS5-CTRL-EFG123"),
        controller(12, "PS4-CTRL-007", "PS4 Controller E1", Ps4, InUse, Good, 67, "PS4-005", ("2023-10-01", "2024-01-16"), 380, "PS4-CTRL-HIJ456"),
    ]
});
