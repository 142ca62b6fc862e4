mod state;

use contracts::domain::a003_room::{registry, Room, RoomStatus, RoomTab};
use contracts::enums::{ClosedSet, RoomType};
use contracts::shared::filter::Choice;
use contracts::shared::query::{RecordAction, ResourceQuery};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::action_notice::ActionNotice;
use crate::shared::components::filter_panel::{ChoiceSelect, EmptyState, FilterPanel, SearchInput, TabStrip};
use crate::shared::components::ui::{Badge, TypeDot};
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{dispatch_action, record_json};
use crate::shared::modal::{DetailField, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_variant(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "success",
        RoomStatus::InUse => "primary",
        RoomStatus::Maintenance => "warning",
    }
}

/// "Alex Chen" plus "14:00 - 16:00", or a dash for idle rooms.
fn session_cell(room: &Room) -> AnyView {
    match (&room.session, room.status) {
        (Some(session), RoomStatus::InUse) => view! {
            <div class="table__stack">
                <span>{session.user.clone()}</span>
                <span class="table__muted">{format!("{} - {}", session.start_time, session.end_time)}</span>
            </div>
        }
        .into_any(),
        _ => view! { <span class="table__muted">"-"</span> }.into_any(),
    }
}

#[component]
pub fn RoomList() -> impl IntoView {
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

    let open_details = move |room: Room| {
        log!("room details: {}", record_json(&room));
        state.update(|s| s.detail.open(room));
    };
    let close_details = Callback::new(move |_| state.update(|s| s.detail.close()));
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    // Picking a status also selects its tab; tabs leave the status alone.
    let on_status = Callback::new(move |choice: Choice<RoomStatus>| {
        state.update(|s| {
            s.query.filters.status = choice;
            s.query.tab = RoomTab::for_status(choice);
        })
    });

    let on_tab = Callback::new(move |tab: RoomTab| state.update(|s| s.query.tab = tab));

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=160.0>"Room"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Type"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=150.0>"Current User"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Price"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|r| r.room_id.clone()
                            children=move |room| {
                                let for_view = room.clone();
                                let id_edit = room.room_id.clone();
                                let id_delete = room.room_id.clone();
                                let room_name = room.room_name.clone();
                                let room_id_label = format!("ID: {}", room.room_id);
                                let room_type = room.room_type;
                                let session = session_cell(&room);
                                let price = room.price_label();
                                let status = room.status;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__stack">
                                                    <span class="table__strong">{room_name}</span>
                                                    <span class="table__muted">{room_id_label}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__room">
                                                <TypeDot code=room_type.code() />
                                                <span>{room_type.display_name()}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>{session}</TableCell>
                                        <TableCell>
                                            <span class="table__strong">{price}</span>
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
                    key=|r| r.room_id.clone()
                    children=move |room| {
                        let for_view = room.clone();
                        let id_edit = room.room_id.clone();
                        let id_delete = room.room_id.clone();
                        let room_name = room.room_name.clone();
                        let room_id_label = format!("ID: {}", room.room_id);
                        let room_code = room.room_type.code();
                        let current_user = room.current_user().unwrap_or("-").to_string();
                        let price = room.price_label();
                        let status = room.status;
                        view! {
                            <div class="record-card">
                                <div class="record-card__header">
                                    <div class="table__room">
                                        <TypeDot code=room_code />
                                        <div class="table__stack">
                                            <span class="record-card__title">{room_name}</span>
                                            <span class="table__muted">{room_id_label}</span>
                                        </div>
                                    </div>
                                    <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                                </div>
                                <div class="record-card__body">
                                    <div class="record-card__meta">
                                        {icon("user")}
                                        <span>{current_user}</span>
                                    </div>
                                    <div class="record-card__meta">
                                        {icon("dollar-sign")}
                                        <span>{price}</span>
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
        state.with(|s| s.detail.selected().cloned()).map(|room| {
            let id_edit = room.room_id.clone();
            let status = room.status;
            let room_type = room.room_type;
            let room_name = room.room_name.clone();
            let room_id_label = format!("ID: {}", room.room_id);
            let capacity = format!("{} people", room.capacity);
            let price = room.price_label();
            let last_maintenance = format_optional_date(room.last_maintenance.as_deref());
            let session = room.session.clone().filter(|_| status == RoomStatus::InUse);
            let equipment = room.equipment.clone();
            view! {
                <Modal
                    title="Room Details"
                    subtitle=room.room_id
                    on_close=close_details
                    footer=move || {
                        let edit_id = id_edit.clone();
                        view! {
                            <button class="modal-btn modal-btn--blue"
                                on:click=move |_| act(RecordAction::Update(edit_id.clone()))>
                                "Edit Room"
                            </button>
                            <button class="modal-btn" on:click=move |_| close_details.run(())>"Close"</button>
                        }
                    }
                >
                    <div class="detail-person">
                        <div class=format!("room-badge room-badge--{}", room_type.code())>
                            {room_type.display_name()}
                        </div>
                        <div class="table__stack">
                            <span class="record-card__title">{room_name}</span>
                            <span class="table__muted">{room_id_label}</span>
                        </div>
                    </div>
                    <div class="detail-grid">
                        <DetailField label="Capacity" icon_name="users">{capacity}</DetailField>
                        <DetailField label="Price" icon_name="dollar-sign">{price}</DetailField>
                        <DetailField label="Status">
                            <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                        </DetailField>
                        <DetailField label="Last Maintenance" icon_name="wrench">{last_maintenance}</DetailField>
                    </div>
                    {session.map(|session| {
                        let session_time = format!("{} - {}", session.start_time, session.end_time);
                        let user = session.user;
                        let time_left = session.time_left;
                        view! {
                            <div class="detail-section">
                                <h4 class="detail-section__title">"Current Session"</h4>
                                <div class="detail-grid">
                                    <DetailField label="User" icon_name="user">{user}</DetailField>
                                    <DetailField label="Time" icon_name="clock">{session_time}</DetailField>
                                    <DetailField label="Time Left" icon_name="clock">{time_left}</DetailField>
                                </div>
                            </div>
                        }
                    })}
                    <div class="detail-section">
                        <h4 class="detail-section__title">"Equipment"</h4>
                        <ul class="detail-list">
                            {equipment.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                        </ul>
                    </div>
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id="a003_room--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Room Management"</h1>
                    <p class="page__subtitle">"Manage and monitor all PlayStation gaming rooms"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| act(RecordAction::Create)>
                        {icon("plus")}
                        " Add Room"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ActionNotice notice=notice />

                <TabStrip
                    active=Signal::derive(move || state.with(|s| s.query.tab))
                    on_select=on_tab
                />

                <FilterPanel result_count=Signal::derive(move || rows.with(Vec::len)) noun="rooms">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search_query placeholder="Search by room ID, name, or current user..." />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.room_type))
                            on_change=Callback::new(move |choice: Choice<RoomType>| state.update(|s| s.query.filters.room_type = choice))
                            all_label="All Room Types"
                        />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.status))
                            on_change=on_status
                            all_label="All Status"
                        />
                    </Flex>
                </FilterPanel>

                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No rooms found" icon_name="home" /> }
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
    fn test_status_variant() {
        assert_eq!(status_variant(RoomStatus::Available), "success");
        assert_eq!(status_variant(RoomStatus::InUse), "primary");
        assert_eq!(status_variant(RoomStatus::Maintenance), "warning");
    }
}
