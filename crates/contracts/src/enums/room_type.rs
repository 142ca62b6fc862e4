use super::closed_set;

closed_set! {
    /// Room / unit tier. Used by bookings, rental units, rooms and the
    /// dashboard room widget.
    RoomType {
        Ps4 => ("ps4", "PS4"),
        Ps5 => ("ps5", "PS5"),
        Vip => ("vip", "VIP"),
    }
}

impl RoomType {
    /// Hourly rate shown on the dashboard room widget.
    pub fn hourly_rate(&self) -> f64 {
        match self {
            RoomType::Ps4 => 15.0,
            RoomType::Ps5 => 25.0,
            RoomType::Vip => 50.0,
        }
    }

    /// Id prefix used by rooms and units of this tier, e.g. `PS5-003`.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RoomType::Ps4 => "PS4",
            RoomType::Ps5 => "PS5",
            RoomType::Vip => "VIP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ClosedSet;

    #[test]
    fn test_codes_round_trip() {
        for t in RoomType::all() {
            assert_eq!(RoomType::from_code(t.code()), Some(t));
        }
        assert_eq!(RoomType::from_code("ps6"), None);
    }

    #[test]
    fn test_serializes_by_label() {
        assert_eq!(serde_json::to_string(&RoomType::Vip).unwrap(), "\"VIP\"");
        let parsed: RoomType = serde_json::from_str("\"PS4\"").unwrap();
        assert_eq!(parsed, RoomType::Ps4);
    }
}
