use contracts::domain::a001_booking::Booking;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct BookingListState {
    pub query: ListQuery<Booking>,
    pub detail: DetailState<Booking>,
}

pub fn create_state() -> RwSignal<BookingListState> {
    RwSignal::new(BookingListState::default())
}
