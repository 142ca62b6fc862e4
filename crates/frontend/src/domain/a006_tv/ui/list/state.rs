use contracts::domain::a006_tv::Television;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct TvListState {
    pub query: ListQuery<Television>,
    pub detail: DetailState<Television>,
}

pub fn create_state() -> RwSignal<TvListState> {
    RwSignal::new(TvListState::default())
}
