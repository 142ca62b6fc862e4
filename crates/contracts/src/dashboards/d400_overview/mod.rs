pub mod dto;
mod seed;

pub use dto::*;
pub use seed::{overview_stats, recent_transactions, revenue_series, room_slots, customer_activity, upcoming_bookings};
