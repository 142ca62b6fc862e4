use contracts::domain::a004_console::GameConsole;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ConsoleListState {
    pub query: ListQuery<GameConsole>,
    pub detail: DetailState<GameConsole>,
}

pub fn create_state() -> RwSignal<ConsoleListState> {
    RwSignal::new(ConsoleListState::default())
}
