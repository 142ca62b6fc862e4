mod state;

use contracts::domain::a008_user::{registry, UserAccount, UserStatus};
use contracts::enums::ClosedSet;
use contracts::shared::filter::Choice;
use contracts::shared::query::{RecordAction, ResourceQuery};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::action_notice::ActionNotice;
use crate::shared::components::filter_panel::{ChoiceSelect, EmptyState, FilterPanel, SearchInput};
use crate::shared::components::ui::{Avatar, Badge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{dispatch_action, record_json};
use crate::shared::modal::{DetailField, Modal};
use crate::shared::number_format::{format_money, format_thousands};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_variant(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "success",
        UserStatus::Inactive => "neutral",
        UserStatus::Banned => "error",
    }
}

fn last_login_label(user: &UserAccount) -> String {
    user.last_login.clone().unwrap_or_else(|| "Never".to_string())
}

#[component]
pub fn UserList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let source = registry();
    let notice = RwSignal::new(None::<String>);
    let search_query = RwSignal::new(String::new());

    Effect::new(move |_| {
        let term = search_query.get();
        untrack(move || state.update(|s| s.query.search = term));
    });

    let rows = Memo::new(move |_| state.with(|s| source.list(&s.query)));

    let open_details = move |user: UserAccount| {
        log!("user details: {}", record_json(&user));
        state.update(|s| s.detail.open(user));
    };
    let close_details = Callback::new(move |_| state.update(|s| s.detail.close()));
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=180.0>"User"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=200.0>"Contact"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Join Date"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Bookings"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Total Spent"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|u| u.id
                            children=move |user| {
                                let for_view = user.clone();
                                let id_edit = user.id.to_string();
                                let id_delete = user.id.to_string();
                                let avatar = user.avatar.clone();
                                let name = user.name.clone();
                                let last_login = format!("Last login: {}", last_login_label(&user));
                                let email = user.email.clone();
                                let phone = user.phone.clone();
                                let join_date = format_date(&user.join_date);
                                let bookings = format_thousands(u64::from(user.total_bookings));
                                let spent = format_money(user.total_spent);
                                let status = user.status;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__person">
                                                    <Avatar initials=avatar />
                                                    <div class="table__stack">
                                                        <span class="table__strong">{name}</span>
                                                        <span class="table__muted">{last_login}</span>
                                                    </div>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__stack">
                                                <span>{email}</span>
                                                <span class="table__muted">{phone}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>{join_date}</TableCell>
                                        <TableCell>{bookings}</TableCell>
                                        <TableCell>
                                            <span class="table__strong">{spent}</span>
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
                                                <button class="icon-btn icon-btn--view" title="View details"
                                                    on:click=move |_| open_details(for_view.clone())>
                                                    {icon("eye")}
                                                </button>
                                                <button class="icon-btn icon-btn--edit" title="Edit"
                                                    on:click=move |_| act(RecordAction::Update(id_edit.clone()))>
                                                    {icon("edit")}
                                                </button>
                                                <button class="icon-btn icon-btn--delete" title="Delete"
                                                    on:click=move |_| act(RecordAction::Delete(id_delete.clone()))>
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        }
    };

    let cards_view = move || {
        view! {
            <div class="card-list">
                <For
                    each=move || rows.get()
                    key=|u| u.id
                    children=move |user| {
                        let for_view = user.clone();
                        let id_edit = user.id.to_string();
                        let id_delete = user.id.to_string();
                        let avatar = user.avatar.clone();
                        let name = user.name.clone();
                        let email = user.email.clone();
                        let bookings = format!("{} bookings", user.total_bookings);
                        let spent = format_money(user.total_spent);
                        let status = user.status;
                        view! {
                            <div class="record-card">
                                <div class="record-card__header">
                                    <div class="table__person">
                                        <Avatar initials=avatar />
                                        <div class="table__stack">
                                            <span class="record-card__title">{name}</span>
                                            <span class="table__muted">{email}</span>
                                        </div>
                                    </div>
                                    <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                                </div>
                                <div class="record-card__body">
                                    <div class="record-card__meta">
                                        {icon("calendar")}
                                        <span>{bookings}</span>
                                    </div>
                                    <div class="record-card__meta">
                                        {icon("dollar-sign")}
                                        <span>{spent}</span>
                                    </div>
                                </div>
                                <div class="record-card__actions">
                                    <button class="chip-btn chip-btn--blue" on:click=move |_| open_details(for_view.clone())>
                                        {icon("eye")}" View"
                                    </button>
                                    <button class="chip-btn chip-btn--green" on:click=move |_| act(RecordAction::Update(id_edit.clone()))>
                                        {icon("edit")}" Edit"
                                    </button>
                                    <button class="chip-btn chip-btn--red" on:click=move |_| act(RecordAction::Delete(id_delete.clone()))>
                                        {icon("trash")}" Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        }
    };

    let modal_view = move || {
        state.with(|s| s.detail.selected().cloned()).map(|user| {
            let id_edit = user.id.to_string();
            let avatar = user.avatar.clone();
            let name = user.name.clone();
            let email = user.email.clone();
            let phone = user.phone.clone();
            let join_date = format_date(&user.join_date);
            let last_login = last_login_label(&user);
            let bookings = format_thousands(u64::from(user.total_bookings));
            let spent = format_money(user.total_spent);
            let status = user.status;
            view! {
                <Modal
                    title="User Details"
                    subtitle=user.email
                    on_close=close_details
                    footer=move || {
                        let edit_id = id_edit.clone();
                        view! {
                            <button class="modal-btn modal-btn--blue"
                                on:click=move |_| act(RecordAction::Update(edit_id.clone()))>
                                "Edit User"
                            </button>
                            <button class="modal-btn" on:click=move |_| close_details.run(())>"Close"</button>
                        }
                    }
                >
                    <div class="detail-person">
                        <Avatar initials=avatar />
                        <div class="table__stack">
                            <span class="record-card__title">{name}</span>
                            <span class="table__muted">{icon("mail")}" "{email}</span>
                            <span class="table__muted">{icon("phone")}" "{phone}</span>
                        </div>
                    </div>
                    <div class="detail-grid">
                        <DetailField label="Join Date" icon_name="calendar">{join_date}</DetailField>
                        <DetailField label="Last Login" icon_name="clock">{last_login}</DetailField>
                        <DetailField label="Total Bookings" icon_name="gamepad">{bookings}</DetailField>
                        <DetailField label="Total Spent" icon_name="dollar-sign">{spent}</DetailField>
                        <DetailField label="Status">
                            <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                        </DetailField>
                    </div>
                    {(status == UserStatus::Banned).then(|| view! {
                        <div class="alert alert--error">
                            {icon("alert-triangle")}
                            <span>"This account is banned and cannot make bookings."</span>
                        </div>
                    })}
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id="a008_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Management"</h1>
                    <p class="page__subtitle">"Manage and monitor all registered users"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| act(RecordAction::Create)>
                        {icon("plus")}
                        " Add User"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ActionNotice notice=notice />

                <FilterPanel result_count=Signal::derive(move || rows.with(Vec::len)) noun="users">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search_query placeholder="Search by name, email, or phone..." />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.status))
                            on_change=Callback::new(move |choice: Choice<UserStatus>| state.update(|s| s.query.filters.status = choice))
                            all_label="All Status"
                        />
                    </Flex>
                </FilterPanel>

                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No users found" icon_name="users" /> }
                >
                    {move || if ctx.is_mobile.get() { cards_view().into_any() } else { table_view().into_any() }}
                </Show>
            </div>

            {modal_view}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_login_label() {
        let mut user = registry().get_by_id("1").unwrap();
        assert_eq!(last_login_label(&user), "2 hours ago");
        user.last_login = None;
        assert_eq!(last_login_label(&user), "Never");
    }

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant(UserStatus::Banned), "error");
        assert_eq!(status_variant(UserStatus::Inactive), "neutral");
    }
}
