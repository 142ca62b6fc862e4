mod state;

use contracts::domain::a006_tv::{registry, tv_stats, Television};
use contracts::enums::{ClosedSet, EquipmentStatus};
use contracts::shared::filter::Choice;
use contracts::shared::query::{RecordAction, ResourceQuery};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::action_notice::ActionNotice;
use crate::shared::components::filter_panel::{ChoiceSelect, EmptyState, FilterPanel, SearchInput};
use crate::shared::components::stat_card::StatGrid;
use crate::shared::components::ui::Badge;
use crate::shared::equipment::{condition_modifier, room_label, status_variant, ServiceFields};
use crate::shared::icons::icon;
use crate::shared::list_utils::{dispatch_action, record_json};
use crate::shared::modal::{DetailField, Modal};
use crate::shared::number_format::format_hours;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

#[component]
pub fn TvList() -> impl IntoView {
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
    let stats = tv_stats(source.records());

    let open_details = move |tv: Television| {
        log!("tv details: {}", record_json(&tv));
        state.update(|s| s.detail.open(tv));
    };
    let close_details = Callback::new(move |_| state.update(|s| s.detail.close()));
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=180.0>"TV"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=80.0>"Type"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=70.0>"Size"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Room"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Condition"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Hours Used"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|t| t.tv_id.clone()
                            children=move |tv| {
                                let for_view = tv.clone();
                                let id_edit = tv.tv_id.clone();
                                let id_delete = tv.tv_id.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__stack">
                                                    <span class="table__strong">{tv.tv_name.clone()}</span>
                                                    <span class="table__muted">{format!("{} · {}", tv.tv_id, tv.brand)}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>{tv.tv_type.display_name()}</TableCell>
                                        <TableCell>{tv.size.clone()}</TableCell>
                                        <TableCell>{room_label(tv.room_assigned.as_deref())}</TableCell>
                                        <TableCell>
                                            <Badge variant=status_variant(tv.status)>{tv.status.display_name()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            <span class=format!("condition condition--{}", condition_modifier(tv.condition))>
                                                {tv.condition.display_name()}
                                            </span>
                                        </TableCell>
                                        <TableCell>{format_hours(tv.hours_used)}</TableCell>
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
                    key=|t| t.tv_id.clone()
                    children=move |tv| {
                        let for_view = tv.clone();
                        let id_edit = tv.tv_id.clone();
                        let id_delete = tv.tv_id.clone();
                        view! {
                            <div class="record-card">
                                <div class="record-card__header">
                                    <div class="table__stack">
                                        <span class="record-card__title">{tv.tv_name.clone()}</span>
                                        <span class="table__muted">{tv.tv_id.clone()}</span>
                                    </div>
                                    <Badge variant=status_variant(tv.status)>{tv.status.display_name()}</Badge>
                                </div>
                                <div class="record-card__body">
                                    <div class="record-card__meta">
                                        {icon("tv")}
                                        <span>{format!("{} {} · {}", tv.size, tv.tv_type, tv.resolution)}</span>
                                    </div>
                                    <div class="record-card__meta">
                                        {icon("map-pin")}
                                        <span>{room_label(tv.room_assigned.as_deref())}</span>
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
        state.with(|s| s.detail.selected().cloned()).map(|tv| {
            let id_edit = tv.tv_id.clone();
            view! {
                <Modal
                    title="TV Details"
                    subtitle=tv.tv_id.clone()
                    on_close=close_details
                    footer=move || {
                        let edit_id = id_edit.clone();
                        view! {
                            <button class="modal-btn modal-btn--blue"
                                on:click=move |_| act(RecordAction::Update(edit_id.clone()))>
                                "Edit TV"
                            </button>
                            <button class="modal-btn" on:click=move |_| close_details.run(())>"Close"</button>
                        }
                    }
                >
                    <div class="detail-person">
                        <div class="room-badge room-badge--tv">{icon("tv")}</div>
                        <div class="table__stack">
                            <span class="record-card__title">{tv.tv_name.clone()}</span>
                            <span class="table__muted">{tv.brand.clone()}</span>
                        </div>
                    </div>
                    <div class="detail-grid">
                        <DetailField label="Type" icon_name="monitor">{tv.tv_type.display_name()}</DetailField>
                        <DetailField label="Size">{tv.size.clone()}</DetailField>
                        <DetailField label="Resolution">{tv.resolution.clone()}</DetailField>
                        <DetailField label="Status">
                            <Badge variant=status_variant(tv.status)>{tv.status.display_name()}</Badge>
                        </DetailField>
                        <ServiceFields
                            room=tv.room_assigned.clone()
                            condition=tv.condition
                            purchase_date=tv.purchase_date.clone()
                            last_maintenance=tv.last_maintenance.clone()
                            hours_used=tv.hours_used
                            serial_number=tv.serial_number.clone()
                        />
                    </div>
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id="a006_tv--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"TV Management"</h1>
                    <p class="page__subtitle">"Manage and monitor all TV inventory"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| act(RecordAction::Create)>
                        {icon("plus")}
                        " Add TV"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ActionNotice notice=notice />
                <StatGrid stats=stats />

                <FilterPanel result_count=Signal::derive(move || rows.with(Vec::len)) noun="TVs">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search_query placeholder="Search by TV ID, name, brand, or serial number..." />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.status))
                            on_change=Callback::new(move |choice: Choice<EquipmentStatus>| state.update(|s| s.query.filters.status = choice))
                            all_label="All Status"
                        />
                    </Flex>
                </FilterPanel>

                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No TVs found" icon_name="tv" /> }
                >
                    {move || if ctx.is_mobile.get() { cards_view().into_any() } else { table_view().into_any() }}
                </Show>
            </div>

            {modal_view}
        </PageFrame>
    }
}
