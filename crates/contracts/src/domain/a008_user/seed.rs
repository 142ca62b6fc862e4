use super::aggregate::{initials, UserAccount, UserStatus};
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn user(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    join_date: &str,
    total_bookings: u32,
    total_spent: f64,
    status: UserStatus,
    last_login: &str,
) -> UserAccount {
    UserAccount {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        join_date: join_date.to_string(),
        total_bookings,
        total_spent,
        status,
        last_login: Some(last_login.to_string()),
        avatar: initials(name),
    }
}

pub(super) static USERS: Lazy<Vec<UserAccount>> = Lazy::new(|| {
    use UserStatus::*;

    vec![
        user(1, "John Smith", "john@email.com", "+1 234 567 8900", "2024-01-15", 25, 625.0, Active, "2 hours ago"),
        user(2, "Emma Davis", "emma@email.com", "+1 234 567 8901", "2024-02-20", 18, 450.0, Active, "1 day ago"),
        user(3, "Mike Johnson", "mike@email.com", "+1 234 567 8902", "2024-01-08", 32, 800.0, Active, "5 minutes ago"),
        user(4, "Lisa Wang", "lisa@email.com", "+1 234 567 8903", "2023-12-10", 45, 1125.0, Active, "3 hours ago"),
        user(5, "Alex Chen", "alex@email.com", "+1 234 567 8904", "2024-03-05", 8, 200.0, Inactive, "2 weeks ago"),
        user(6, "Sarah Kim", "sarah@email.com", "+1 234 567 8905", "2024-01-22", 12, 300.0, Banned, "1 month ago"),
        user(7, "Tom Wilson", "tom@email.com", "+1 234 567 8906", "2024-02-14", 22, 550.0, Active, "30 minutes ago"),
        user(8, "Nina Rodriguez", "nina@email.com", "+1 234 567 8907", "2024-03-01", 15, 375.0, Active, "1 hour ago"),
    ]
});
