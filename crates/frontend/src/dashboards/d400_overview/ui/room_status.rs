use contracts::dashboards::d400_overview::{room_slots, RoomSlot, RoomSlotTab};
use contracts::domain::a003_room::RoomStatus;
use contracts::enums::ClosedSet;
use contracts::shared::config::AppConfig;
use contracts::shared::filter::{Choice, ListQuery};
use contracts::shared::pagination::paginate;
use contracts::shared::query::{RecordAction, ResourceQuery, StaticRegistry};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::action_notice::ActionNotice;
use crate::shared::components::filter_panel::{ChoiceSelect, SearchInput, TabStrip};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::dispatch_action;

fn status_variant(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "success",
        RoomStatus::InUse => "primary",
        RoomStatus::Maintenance => "warning",
    }
}

/// Room availability for one tier at a time, paged.
#[component]
pub fn RoomStatusWidget() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");
    let per_page = config.dashboard.room_status_page_size;

    let source = StaticRegistry::<RoomSlot>::new(room_slots());
    let query = RwSignal::new(ListQuery::<RoomSlot>::new());
    let page = RwSignal::new(1usize);
    let search_query = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);

    // Any change to the query starts over from the first page.
    Effect::new(move |_| {
        let term = search_query.get();
        untrack(move || {
            query.update(|q| q.search = term);
            page.set(1);
        });
    });

    let rows = Memo::new(move |_| query.with(|q| source.list(q)));
    let window = Memo::new(move |_| rows.with(|r| paginate(r.len(), page.get(), per_page)));
    let visible = move || rows.with(|r| window.get().slice(r).to_vec());

    let on_tab = Callback::new(move |tab: RoomSlotTab| {
        query.update(|q| q.tab = tab);
        page.set(1);
    });
    let on_status = Callback::new(move |choice: Choice<RoomStatus>| {
        query.update(|q| q.filters.status = choice);
        page.set(1);
    });
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    view! {
        <div class="widget-card">
            <div class="widget-card__header">
                <h3 class="widget-card__title">"Room Status"</h3>
                <button class="link-btn" on:click=move |_| ctx.open_page("a003_room")>"View All"</button>
            </div>

            <ActionNotice notice=notice />

            <TabStrip active=Signal::derive(move || query.with(|q| q.tab)) on_select=on_tab />

            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <SearchInput value=search_query placeholder="Search rooms..." />
                <ChoiceSelect
                    value=Signal::derive(move || query.with(|q| q.filters.status))
                    on_change=on_status
                    all_label="All Status"
                />
            </Flex>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=160.0>"Room"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=70.0>"Price"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=visible
                            key=|slot| slot.id.clone()
                            children=move |slot| {
                                let id_edit = slot.id.clone();
                                let id_delete = slot.id.clone();
                                let name = slot.name.clone();
                                let id_label = format!("ID: {}", slot.id);
                                let status = slot.status;
                                let price = slot.price_label();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <div class="table__stack">
                                                <span class="table__strong">{name}</span>
                                                <span class="table__muted">{id_label}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            <span class="table__strong">{price}</span>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__actions">
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

            <Show when=move || rows.with(|r| r.is_empty())>
                <p class="widget-card__empty">"No rooms match the current filters."</p>
            </Show>

            <PaginationControls window=window on_page_change=Callback::new(move |p| page.set(p)) />
        </div>
    }
}
