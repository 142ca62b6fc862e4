use super::seed::USERS;
use crate::shared::filter::{Choice, NoTab, Predicate, Resource};
use crate::shared::query::StaticRegistry;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

crate::enums::closed_set! {
    UserStatus {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        Banned => ("banned", "Banned"),
    }
}

/// Registered customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub join_date: String,
    pub total_bookings: u32,
    pub total_spent: f64,
    pub status: UserStatus,
    /// Relative display string ("2 hours ago").
    pub last_login: Option<String>,
    /// Initials shown in the avatar circle.
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserFilters {
    pub status: Choice<UserStatus>,
}

impl Predicate<UserAccount> for UserFilters {
    fn admits(&self, record: &UserAccount) -> bool {
        self.status.admits(&record.status)
    }
}

impl Resource for UserAccount {
    type Tab = NoTab;
    type Filters = UserFilters;

    const RESOURCE: &'static str = "user";

    fn record_id(&self) -> Cow<'_, str> {
        Cow::Owned(self.id.to_string())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.phone]
    }
}

pub fn registry() -> StaticRegistry<UserAccount> {
    StaticRegistry::new(USERS.as_slice())
}

/// Upper-case initials of the first two words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, ListQuery};
    use crate::shared::query::ResourceQuery;
    use std::collections::HashSet;

    fn all() -> &'static [UserAccount] {
        registry().records()
    }

    #[test]
    fn test_registry() {
        assert_eq!(all().len(), 8);
        let ids: HashSet<Cow<'_, str>> = all().iter().map(|u| u.record_id()).collect();
        assert_eq!(ids.len(), 8);
        assert_eq!(registry().get_by_id("1").unwrap().email, "john@email.com");
        assert!(registry().get_by_id("john@email.com").is_err());
        assert!(all().iter().all(|u| u.avatar == initials(&u.name)));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Nina Rodriguez"), "NR");
        assert_eq!(initials("madonna"), "M");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_search_by_phone() {
        let result = filter_records(all(), &ListQuery::<UserAccount>::new().with_search("8905"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, UserStatus::Banned);
    }

    #[test]
    fn test_status_filter() {
        let query = ListQuery::<UserAccount>::new().with_filters(UserFilters {
            status: Choice::Only(UserStatus::Active),
        });
        assert_eq!(filter_records(all(), &query).len(), 6);
    }
}
