use contracts::dashboards::d400_overview::overview_stats;
use leptos::prelude::*;

use super::charts::{ActivityChart, RevenueChart};
use super::recent_transactions::RecentTransactionsWidget;
use super::room_status::RoomStatusWidget;
use super::upcoming_bookings::UpcomingBookingsWidget;
use crate::shared::components::stat_card::StatGrid;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Landing page: headline numbers, two charts and three live widgets.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__content dashboard">
                <StatGrid stats=overview_stats() />

                <div class="dashboard__row">
                    <RevenueChart />
                    <ActivityChart />
                </div>

                <div class="dashboard__row">
                    <RoomStatusWidget />
                    <UpcomingBookingsWidget />
                </div>

                <div class="dashboard__row dashboard__row--single">
                    <RecentTransactionsWidget />
                </div>
            </div>
        </PageFrame>
    }
}
