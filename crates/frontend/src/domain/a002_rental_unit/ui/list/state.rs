use contracts::domain::a002_rental_unit::RentalUnit;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct RentalUnitListState {
    pub query: ListQuery<RentalUnit>,
    pub detail: DetailState<RentalUnit>,
}

pub fn create_state() -> RwSignal<RentalUnitListState> {
    RwSignal::new(RentalUnitListState::default())
}
