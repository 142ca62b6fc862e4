use super::closed_set;

closed_set! {
    /// Operational status of consoles, controllers and TVs.
    EquipmentStatus {
        Available => ("available", "Available"),
        InUse => ("in_use", "In Use"),
        Maintenance => ("maintenance", "Maintenance"),
        Offline => ("offline", "Offline"),
    }
}

impl EquipmentStatus {
    /// Statuses counted by the "needs maintenance" stat cards.
    pub const NEEDS_ATTENTION: &'static [EquipmentStatus] =
        &[EquipmentStatus::Maintenance, EquipmentStatus::Offline];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ClosedSet;

    #[test]
    fn test_labels() {
        assert_eq!(EquipmentStatus::InUse.display_name(), "In Use");
        assert_eq!(EquipmentStatus::InUse.to_string(), "In Use");
        assert_eq!(EquipmentStatus::from_code("in_use"), Some(EquipmentStatus::InUse));
        assert_eq!(EquipmentStatus::all().len(), 4);
    }
}
