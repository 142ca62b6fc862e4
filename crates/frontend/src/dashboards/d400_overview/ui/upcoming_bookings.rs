use contracts::dashboards::d400_overview::{upcoming_bookings, BookingConfirmation};
use contracts::enums::ClosedSet;
use contracts::shared::config::AppConfig;
use contracts::shared::pagination::paginate;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Avatar, Badge};
use crate::shared::icons::icon;

fn confirmation_variant(status: BookingConfirmation) -> &'static str {
    match status {
        BookingConfirmation::Confirmed => "success",
        BookingConfirmation::Pending => "warning",
    }
}

#[component]
pub fn UpcomingBookingsWidget() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let per_page = config.dashboard.upcoming_bookings_page_size;

    let bookings = upcoming_bookings();
    let page = RwSignal::new(1usize);
    let window = Memo::new(move |_| paginate(bookings.len(), page.get(), per_page));

    view! {
        <div class="widget-card">
            <div class="widget-card__header">
                <h3 class="widget-card__title">"Upcoming Bookings"</h3>
                <button class="link-btn" on:click=move |_| ctx.open_page("a001_booking")>"View All"</button>
            </div>

            <ul class="booking-feed">
                <For
                    each=move || window.get().slice(bookings).to_vec()
                    key=|b| b.id.clone()
                    children=|booking| {
                        view! {
                            <li class="booking-feed__item">
                                <Avatar initials=booking.avatar.clone() />
                                <div class="booking-feed__body">
                                    <span class="table__strong">{booking.user.clone()}</span>
                                    <span class="table__muted">
                                        {icon("map-pin")}" "{booking.room.clone()}
                                        " · "
                                        {icon("clock")}" "{booking.time.clone()}
                                    </span>
                                </div>
                                <Badge variant=confirmation_variant(booking.status)>
                                    {booking.status.display_name()}
                                </Badge>
                            </li>
                        }
                    }
                />
            </ul>

            <PaginationControls window=window on_page_change=Callback::new(move |p| page.set(p)) />
        </div>
    }
}
