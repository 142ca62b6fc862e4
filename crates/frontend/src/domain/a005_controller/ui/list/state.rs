use contracts::domain::a005_controller::Controller;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ControllerListState {
    pub query: ListQuery<Controller>,
    pub detail: DetailState<Controller>,
}

pub fn create_state() -> RwSignal<ControllerListState> {
    RwSignal::new(ControllerListState::default())
}
