//! Pieces shared by the console, controller and TV inventory pages.

use contracts::enums::{Condition, EquipmentStatus};
use leptos::prelude::*;

use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::modal::DetailField;
use crate::shared::number_format::format_hours;

pub fn status_variant(status: EquipmentStatus) -> &'static str {
    match status {
        EquipmentStatus::Available => "success",
        EquipmentStatus::InUse => "primary",
        EquipmentStatus::Maintenance => "warning",
        EquipmentStatus::Offline => "error",
    }
}

/// Text colour modifier for the condition column.
pub fn condition_modifier(condition: Condition) -> &'static str {
    match condition {
        Condition::Excellent => "emerald",
        Condition::Good => "blue",
        Condition::Fair => "yellow",
        Condition::Poor => "red",
    }
}

pub fn room_label(room: Option<&str>) -> String {
    room.unwrap_or("Unassigned").to_string()
}

/// Service history block of an inventory detail modal.
#[component]
pub fn ServiceFields(
    #[prop(into)] room: Option<String>,
    condition: Condition,
    #[prop(into)] purchase_date: String,
    #[prop(into)] last_maintenance: Option<String>,
    hours_used: u32,
    #[prop(into)] serial_number: String,
) -> impl IntoView {
    view! {
        <DetailField label="Room" icon_name="map-pin">{room_label(room.as_deref())}</DetailField>
        <DetailField label="Condition">
            <span class=format!("condition condition--{}", condition_modifier(condition))>
                {condition.to_string()}
            </span>
        </DetailField>
        <DetailField label="Purchase Date" icon_name="calendar">{format_date(&purchase_date)}</DetailField>
        <DetailField label="Last Maintenance" icon_name="wrench">
            {format_optional_date(last_maintenance.as_deref())}
        </DetailField>
        <DetailField label="Hours Used" icon_name="clock">{format_hours(hours_used)}</DetailField>
        <DetailField label="Serial Number">
            <span class="table__mono">{serial_number}</span>
        </DetailField>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_cover_every_status() {
        use contracts::enums::ClosedSet;
        for status in EquipmentStatus::all() {
            assert!(!status_variant(status).is_empty());
        }
        assert_eq!(status_variant(EquipmentStatus::Offline), "error");
    }

    #[test]
    fn test_room_label() {
        assert_eq!(room_label(Some("PS5-002")), "PS5-002");
        assert_eq!(room_label(None), "Unassigned");
    }

    #[test]
    fn test_condition_modifier() {
        assert_eq!(condition_modifier(Condition::Poor), "red");
        assert_eq!(condition_modifier(Condition::Excellent), "emerald");
    }
}
