use contracts::domain::a003_room::Room;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct RoomListState {
    pub query: ListQuery<Room>,
    pub detail: DetailState<Room>,
}

pub fn create_state() -> RwSignal<RoomListState> {
    RwSignal::new(RoomListState::default())
}
