use super::aggregate::{Television, TvType};
use crate::enums::{Condition, EquipmentStatus};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn tv(
    id: u32,
    tv_id: &str,
    tv_name: &str,
    (tv_type, size): (TvType, &str),
    status: EquipmentStatus,
    condition: Condition,
    room: &str,
    (purchase_date, last_maintenance): (&str, &str),
    hours_used: u32,
    serial_number: &str,
    (brand, resolution): (&str, &str),
) -> Television {
    Television {
        id,
        tv_id: tv_id.to_string(),
        tv_name: tv_name.to_string(),
        tv_type,
        size: size.to_string(),
        status,
        condition,
        room_assigned: Some(room.to_string()),
        purchase_date: purchase_date.to_string(),
        last_maintenance: Some(last_maintenance.to_string()),
        hours_used,
        serial_number: serial_number.to_string(),
        brand: brand.to_string(),
        resolution: resolution.to_string(),
    }
}

pub(super) static TELEVISIONS: Lazy<Vec<Television>> = Lazy::new(|| {
    use Condition::*;
    use EquipmentStatus::*;
    use TvType::*;

    const UHD: &str = "3840x2160";
    const FHD: &str = "1920x1080";

    vec![
        tv(1, "TV-001", "Samsung 55\" 4K Smart TV A", (FourK, "55\""), InUse, Excellent, "PS5-001", ("2023-06-10", "2024-01-14"), 2450, "SAM-55-4K-001", ("Samsung", UHD)),
        tv(2, "TV-002", "LG 50\" LED TV B", (Led, "50\""), Available, Good, "PS4-001", ("2023-01-15", "2024-01-10"), 3200, "LG-50-LED-002", ("LG", FHD)),
        tv(3, "TV-003", "Sony 65\" OLED TV C", (Oled, "65\""), Maintenance, Fair, "VIP-001", ("2022-11-10", "2024-01-05"), 4850, "SONY-65-OLED-003", ("Sony", UHD)),
        tv(4, "TV-004", "Samsung 55\" Smart TV D", (SmartTv, "55\""), Available, Excellent, "PS5-002", ("2023-07-20", "2024-01-11"), 1850, "SAM-55-SMART-004", ("Samsung", UHD)),
        tv(5, "TV-005", "LG 50\" LED TV E", (Led, "50\""), Offline, Poor, "PS4-002", ("2022-08-15", "2023-12-20"), 5200, "LG-50-LED-005", ("LG", FHD)),
        tv(6, "TV-006", "Sony 65\" 4K TV F", (FourK, "65\""), InUse, Good, "VIP-002", ("2023-08-15", "2024-01-09"), 2100, "SONY-65-4K-006", ("Sony", UHD)),
        tv(7, "TV-007", "Samsung 75\" OLED TV G", (Oled, "75\""), Available, Excellent, "VIP-003", ("2023-09-05", "2024-01-13"), 1200, "SAM-75-OLED-007", ("Samsung", UHD)),
        tv(8, "TV-008", "LG 55\" Smart TV H", (SmartTv, "55\""), Maintenance, Good, "PS5-003", ("2023-10-01", "2024-01-03"), 980, "LG-55-SMART-008", ("LG", UHD)),
    ]
});
