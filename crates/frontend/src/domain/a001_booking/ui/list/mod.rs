mod state;

use contracts::domain::a001_booking::{registry, Booking, BookingStatus};
use contracts::enums::{ClosedSet, RoomType};
use contracts::shared::filter::Choice;
use contracts::shared::query::{RecordAction, ResourceQuery};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::action_notice::ActionNotice;
use crate::shared::components::filter_panel::{ChoiceSelect, EmptyState, FilterPanel, SearchInput, TabStrip};
use crate::shared::components::ui::{Avatar, Badge, TypeDot};
use crate::shared::icons::icon;
use crate::shared::list_utils::{dispatch_action, record_json};
use crate::shared::modal::{DetailField, Modal};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a008_user::initials;
use state::create_state;

fn status_variant(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Upcoming => "primary",
        BookingStatus::Active => "success",
        BookingStatus::Completed => "neutral",
        BookingStatus::Cancelled => "error",
        BookingStatus::Missed => "warning",
    }
}

#[component]
pub fn BookingList() -> impl IntoView {
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

    let open_details = move |booking: Booking| {
        log!("booking details: {}", record_json(&booking));
        state.update(|s| s.detail.open(booking));
    };
    let close_details = Callback::new(move |_| state.update(|s| s.detail.close()));
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=90.0>"Booking ID"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Customer"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Room"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=140.0>"Time Slot"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|b| b.booking_id.clone()
                            children=move |booking| {
                                let for_view = booking.clone();
                                let id_edit = booking.booking_id.clone();
                                let id_delete = booking.booking_id.clone();
                                let booking_id = booking.booking_id.clone();
                                let customer_initials = initials(&booking.customer_name);
                                let customer_name = booking.customer_name.clone();
                                let room_code = booking.room_type.code();
                                let room_number = booking.room_number.clone();
                                let date = booking.date.clone();
                                let time_range = booking.time_range();
                                let status = booking.status;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <span class="table__id">{booking_id}</span>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__person">
                                                    <Avatar initials=customer_initials />
                                                    <span>{customer_name}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__room">
                                                <TypeDot code=room_code />
                                                <span>{room_number}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__stack">
                                                <span>{date}</span>
                                                <span class="table__muted">{time_range}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant=status_variant(status)>
                                                {status.display_name()}
                                            </Badge>
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
                    key=|b| b.booking_id.clone()
                    children=move |booking| {
                        let for_view = booking.clone();
                        let id_edit = booking.booking_id.clone();
                        let id_cancel = booking.booking_id.clone();
                        let booking_id = booking.booking_id.clone();
                        let customer_initials = initials(&booking.customer_name);
                        let customer_name = booking.customer_name.clone();
                        let room_code = booking.room_type.code();
                        let room_number = booking.room_number.clone();
                        let when = format!("{}, {}", booking.date, booking.time_range());
                        let status = booking.status;
                        view! {
                            <div class="record-card">
                                <div class="record-card__header">
                                    <div class="table__person">
                                        <Avatar initials=customer_initials />
                                        <div class="table__stack">
                                            <span class="record-card__title">{customer_name}</span>
                                            <span class="table__muted">{booking_id}</span>
                                        </div>
                                    </div>
                                    <Badge variant=status_variant(status)>
                                        {status.display_name()}
                                    </Badge>
                                </div>
                                <div class="record-card__body">
                                    <div class="table__room">
                                        <TypeDot code=room_code />
                                        <span>{room_number}</span>
                                    </div>
                                    <div class="record-card__meta">
                                        {icon("clock")}
                                        <span>{when}</span>
                                    </div>
                                </div>
                                <div class="record-card__actions">
                                    <button class="chip-btn chip-btn--blue" on:click=move |_| open_details(for_view.clone())>
                                        {icon("eye")}" View"
                                    </button>
                                    <button class="chip-btn chip-btn--green" on:click=move |_| act(RecordAction::Update(id_edit.clone()))>
                                        {icon("edit")}" Edit"
                                    </button>
                                    <button class="chip-btn chip-btn--red" on:click=move |_| act(RecordAction::Cancel(id_cancel.clone()))>
                                        {icon("x")}" Cancel"
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
        state.with(|s| s.detail.selected().cloned()).map(|booking| {
            let id_reschedule = booking.booking_id.clone();
            let id_cancel = booking.booking_id.clone();
            let actionable = booking.is_actionable();
            let booking_id = booking.booking_id.clone();
            let customer_initials = initials(&booking.customer_name);
            let customer_name = booking.customer_name.clone();
            let customer_email = booking.customer_email.clone();
            let customer_phone = booking.customer_phone.clone();
            let room_code = booking.room_type.code();
            let room_label = format!(" {} ({})", booking.room_number, booking.room_type);
            let date = booking.date.clone();
            let time_range = booking.time_range();
            let duration = booking.duration.clone();
            let price = format_money(booking.price);
            let status = booking.status;
            let status_note = booking.status_note();
            view! {
                <Modal
                    title="Booking Details"
                    subtitle=booking_id
                    on_close=close_details
                    footer=move || {
                        let reschedule_id = id_reschedule.clone();
                        let cancel_id = id_cancel.clone();
                        view! {
                            {actionable.then(|| view! {
                                <button class="modal-btn modal-btn--blue"
                                    on:click=move |_| act(RecordAction::Reschedule(reschedule_id.clone()))>
                                    "Reschedule"
                                </button>
                                <button class="modal-btn modal-btn--red"
                                    on:click=move |_| act(RecordAction::Cancel(cancel_id.clone()))>
                                    "Cancel"
                                </button>
                            })}
                            <button class="modal-btn" on:click=move |_| close_details.run(())>"Close"</button>
                        }
                    }
                >
                    <div class="detail-person">
                        <Avatar initials=customer_initials />
                        <div class="table__stack">
                            <span class="record-card__title">{customer_name}</span>
                            {customer_email.map(|email| view! {
                                <span class="table__muted">{icon("mail")}" "{email}</span>
                            })}
                            {customer_phone.map(|phone| view! {
                                <span class="table__muted">{icon("phone")}" "{phone}</span>
                            })}
                        </div>
                    </div>
                    <div class="detail-grid">
                        <DetailField label="Room" icon_name="map-pin">
                            <TypeDot code=room_code />
                            {room_label}
                        </DetailField>
                        <DetailField label="Date" icon_name="calendar">{date}</DetailField>
                        <DetailField label="Time" icon_name="clock">{time_range}</DetailField>
                        <DetailField label="Duration" icon_name="clock">{duration}</DetailField>
                        <DetailField label="Price" icon_name="dollar-sign">{price}</DetailField>
                        <DetailField label="Status">
                            <Badge variant=status_variant(status)>
                                {status.display_name()}
                            </Badge>
                        </DetailField>
                    </div>
                    {status_note.map(|note| view! {
                        <div class="alert alert--warning">
                            {icon("alert-triangle")}
                            <span>{note}</span>
                        </div>
                    })}
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id="a001_booking--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Booking Management"</h1>
                    <p class="page__subtitle">"Manage and monitor all PlayStation rental bookings"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| act(RecordAction::Create)>
                        {icon("plus")}
                        " New Booking"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ActionNotice notice=notice />

                <TabStrip
                    active=Signal::derive(move || state.with(|s| s.query.tab))
                    on_select=Callback::new(move |tab| state.update(|s| s.query.tab = tab))
                />

                <FilterPanel result_count=Signal::derive(move || rows.with(Vec::len)) noun="bookings">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search_query placeholder="Search by booking ID or customer name..." />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.room_type))
                            on_change=Callback::new(move |choice: Choice<RoomType>| state.update(|s| s.query.filters.room_type = choice))
                            all_label="All Rooms"
                        />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.status))
                            on_change=Callback::new(move |choice: Choice<BookingStatus>| state.update(|s| s.query.filters.status = choice))
                            all_label="All Status"
                        />
                    </Flex>
                </FilterPanel>

                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No bookings found" icon_name="calendar" /> }
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
        assert_eq!(status_variant(BookingStatus::Upcoming), "primary");
        assert_eq!(status_variant(BookingStatus::Missed), "warning");
        assert_eq!(status_variant(BookingStatus::Cancelled), "error");
    }

    #[test]
    fn test_row_labels_from_registry() {
        let booking = registry().get_by_id("BK001").unwrap();
        assert_eq!(initials(&booking.customer_name), "JS");
        assert_eq!(booking.room_type.code(), RoomType::Ps5.code());
        assert!(!booking.time_range().is_empty());
    }
}
