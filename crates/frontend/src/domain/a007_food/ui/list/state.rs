use contracts::domain::a007_food::FoodItem;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct FoodListState {
    pub query: ListQuery<FoodItem>,
    pub detail: DetailState<FoodItem>,
}

pub fn create_state() -> RwSignal<FoodListState> {
    RwSignal::new(FoodListState::default())
}
