mod charts;
mod dashboard;
mod recent_transactions;
mod room_status;
mod upcoming_bookings;

pub use dashboard::OverviewDashboard;
