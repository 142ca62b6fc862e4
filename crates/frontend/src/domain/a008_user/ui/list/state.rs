use contracts::domain::a008_user::UserAccount;
use contracts::shared::detail::DetailState;
use contracts::shared::filter::ListQuery;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct UserListState {
    pub query: ListQuery<UserAccount>,
    pub detail: DetailState<UserAccount>,
}

pub fn create_state() -> RwSignal<UserListState> {
    RwSignal::new(UserListState::default())
}
