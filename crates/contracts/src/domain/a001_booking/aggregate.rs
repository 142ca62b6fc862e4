use super::seed::BOOKINGS;
use crate::enums::RoomType;
use crate::shared::filter::{Choice, Predicate, Resource, TabBucket};
use crate::shared::query::StaticRegistry;
use crate::shared::stats::Classified;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

crate::enums::closed_set! {
    /// Lifecycle status of a booking.
    BookingStatus {
        Upcoming => ("upcoming", "Upcoming"),
        Active => ("active", "Active"),
        Completed => ("completed", "Completed"),
        Cancelled => ("cancelled", "Cancelled"),
        Missed => ("missed", "Missed"),
    }
}

/// Minutes after the start time before an unattended booking is marked missed.
pub const MISSED_GRACE_MINUTES: u32 = 15;

// ============================================================================
// Record
// ============================================================================

/// Room reservation made by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub booking_id: String,
    pub customer_name: String,
    pub room_type: RoomType,
    pub room_number: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub status: BookingStatus,
    pub price: f64,
    pub duration: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

impl Booking {
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Explanation shown in the detail modal for missed bookings.
    pub fn status_note(&self) -> Option<String> {
        (self.status == BookingStatus::Missed).then(|| {
            format!(
                "This booking was automatically marked as Missed after exceeding the {}-minute grace period.",
                MISSED_GRACE_MINUTES
            )
        })
    }

    /// Cancel and reschedule make sense only for bookings that have not ended.
    pub fn is_actionable(&self) -> bool {
        matches!(self.status, BookingStatus::Upcoming | BookingStatus::Active)
    }
}

// ============================================================================
// Tabs & filters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingTab {
    #[default]
    All,
    Upcoming,
    Completed,
    Cancelled,
}

impl TabBucket for BookingTab {
    type Key = BookingStatus;

    fn tabs() -> &'static [Self] {
        &[
            BookingTab::All,
            BookingTab::Upcoming,
            BookingTab::Completed,
            BookingTab::Cancelled,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            BookingTab::All => "All",
            BookingTab::Upcoming => "Upcoming",
            BookingTab::Completed => "Completed",
            BookingTab::Cancelled => "Cancelled",
        }
    }

    // Active bookings only show under All; Missed ones are grouped with Cancelled.
    fn members(&self) -> Option<&'static [BookingStatus]> {
        match self {
            BookingTab::All => None,
            BookingTab::Upcoming => Some(&[BookingStatus::Upcoming]),
            BookingTab::Completed => Some(&[BookingStatus::Completed]),
            BookingTab::Cancelled => Some(&[BookingStatus::Cancelled, BookingStatus::Missed]),
        }
    }
}

impl Predicate<Booking> for BookingTab {
    fn admits(&self, record: &Booking) -> bool {
        self.contains(&record.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingFilters {
    pub room_type: Choice<RoomType>,
    pub status: Choice<BookingStatus>,
}

impl Predicate<Booking> for BookingFilters {
    fn admits(&self, record: &Booking) -> bool {
        self.room_type.admits(&record.room_type) && self.status.admits(&record.status)
    }
}

impl Resource for Booking {
    type Tab = BookingTab;
    type Filters = BookingFilters;

    const RESOURCE: &'static str = "booking";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.booking_id)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.booking_id, &self.customer_name]
    }
}

impl Classified for Booking {
    type Kind = RoomType;
    type Status = BookingStatus;

    fn kind(&self) -> RoomType {
        self.room_type
    }

    fn status(&self) -> BookingStatus {
        self.status
    }
}

pub fn registry() -> StaticRegistry<Booking> {
    StaticRegistry::new(BOOKINGS.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ClosedSet;
    use crate::shared::error::RegistryError;
    use crate::shared::filter::{filter_records, ListQuery};
    use crate::shared::query::{RecordAction, ResourceQuery};
    use crate::shared::stats::count_matching;
    use std::collections::HashSet;

    fn all() -> &'static [Booking] {
        registry().records()
    }

    #[test]
    fn test_registry_ids_unique() {
        let ids: HashSet<Cow<'_, str>> = all().iter().map(|b| b.record_id()).collect();
        assert_eq!(ids.len(), all().len());
        assert_eq!(all().len(), 8);
    }

    #[test]
    fn test_identity_query_returns_everything() {
        let query = ListQuery::<Booking>::new();
        assert!(query.is_identity());
        assert_eq!(filter_records(all(), &query), all().to_vec());
    }

    #[test]
    fn test_cancelled_tab_includes_missed() {
        let query = ListQuery::<Booking>::new().with_tab(BookingTab::Cancelled);
        let result = filter_records(all(), &query);
        assert_eq!(result.len(), 2);
        let ids: Vec<&str> = result.iter().map(|b| b.booking_id.as_str()).collect();
        assert_eq!(ids, vec!["BK005", "BK006"]);
    }

    #[test]
    fn test_active_only_under_all_tab() {
        for tab in BookingTab::tabs().iter().filter(|t| **t != BookingTab::All) {
            let query = ListQuery::<Booking>::new().with_tab(*tab);
            assert!(filter_records(all(), &query)
                .iter()
                .all(|b| b.status != BookingStatus::Active));
        }
    }

    #[test]
    fn test_search_by_booking_id() {
        let query = ListQuery::<Booking>::new().with_search("BK001");
        let result = filter_records(all(), &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].customer_name, "John Smith");
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let query = ListQuery::<Booking>::new().with_search("1 ");
        assert!(!query.is_identity());
        assert!(filter_records(all(), &query).is_empty());
        assert!(filter_records(all(), &ListQuery::<Booking>::new().with_search("  ")).is_empty());
    }

    #[test]
    fn test_search_case_insensitive() {
        let lower = filter_records(all(), &ListQuery::<Booking>::new().with_search("john"));
        let upper = filter_records(all(), &ListQuery::<Booking>::new().with_search("JOHN"));
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn test_filter_is_ordered_subsequence_and_idempotent() {
        let query = ListQuery::<Booking>::new()
            .with_tab(BookingTab::Upcoming)
            .with_filters(BookingFilters {
                room_type: Choice::Only(RoomType::Ps4),
                status: Choice::All,
            });
        let once = filter_records(all(), &query);
        assert_eq!(filter_records(&once, &query), once);

        let mut cursor = all().iter();
        for item in &once {
            assert!(cursor.any(|b| b == item));
        }
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_stats_agree_with_filters() {
        for room_type in RoomType::all() {
            for status in BookingStatus::all() {
                let query = ListQuery::<Booking>::new().with_filters(BookingFilters {
                    room_type: Choice::Only(room_type),
                    status: Choice::Only(status),
                });
                assert_eq!(
                    count_matching(all(), Some(room_type), &[status]),
                    filter_records(all(), &query).len()
                );
            }
        }
    }

    #[test]
    fn test_missed_note() {
        let missed = registry().get_by_id("BK006").unwrap();
        assert!(missed.status_note().unwrap().contains("15-minute grace period"));
        assert!(registry().get_by_id("BK001").unwrap().status_note().is_none());
    }

    #[test]
    fn test_get_by_id_not_found() {
        assert_eq!(
            registry().get_by_id("BK999"),
            Err(RegistryError::NotFound {
                resource: "booking",
                id: "BK999".to_string()
            })
        );
    }

    #[test]
    fn test_mutations_are_rejected() {
        let result = registry().apply(RecordAction::Cancel("BK002".to_string()));
        assert!(matches!(result, Err(RegistryError::ReadOnly { action: "cancel", .. })));
        let missing = registry().apply(RecordAction::Reschedule("nope".to_string()));
        assert!(matches!(missing, Err(RegistryError::NotFound { .. })));
    }
}
