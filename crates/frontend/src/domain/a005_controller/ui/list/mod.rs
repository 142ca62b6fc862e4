mod state;

use contracts::domain::a004_console::hardware_stats;
use contracts::domain::a005_controller::{registry, Controller};
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
use crate::shared::components::ui::{Badge, TypeDot};
use crate::shared::equipment::{condition_modifier, room_label, status_variant, ServiceFields};
use crate::shared::icons::icon;
use crate::shared::list_utils::{dispatch_action, record_json};
use crate::shared::modal::{DetailField, Modal};
use crate::shared::number_format::format_hours;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

/// Horizontal gauge coloured by charge band; "N/A" without a reading.
#[component]
fn BatteryGauge(level: Option<u8>, #[prop(into)] band: Option<&'static str>) -> impl IntoView {
    match (level, band) {
        (Some(level), Some(band)) => view! {
            <div class="battery">
                <div class="battery__track">
                    <div
                        class=format!("battery__fill battery__fill--{band}")
                        style=format!("width: {level}%;")
                    ></div>
                </div>
                <span class="battery__label">{format!("{level}%")}</span>
            </div>
        }
        .into_any(),
        _ => view! { <span class="table__muted">"N/A"</span> }.into_any(),
    }
}

#[component]
pub fn ControllerList() -> impl IntoView {
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
    let stats = hardware_stats(source.records());

    let open_details = move |controller: Controller| {
        log!("controller details: {}", record_json(&controller));
        state.update(|s| s.detail.open(controller));
    };
    let close_details = Callback::new(move |_| state.update(|s| s.detail.close()));
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=180.0>"Controller"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=70.0>"Type"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Room"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Condition"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Battery"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Hours Used"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|c| c.controller_id.clone()
                            children=move |controller| {
                                let for_view = controller.clone();
                                let id_edit = controller.controller_id.clone();
                                let id_delete = controller.controller_id.clone();
                                let controller_id = controller.controller_id.clone();
                                let controller_name = controller.controller_name.clone();
                                let controller_type = controller.controller_type;
                                let room = room_label(controller.room_assigned.as_deref());
                                let status = controller.status;
                                let condition = controller.condition;
                                let battery_level = controller.battery_level;
                                let battery_band = controller.battery_band().map(|b| b.css_modifier());
                                let hours_used = format_hours(controller.hours_used);
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__stack">
                                                    <span class="table__strong">{controller_name}</span>
                                                    <span class="table__muted">{controller_id}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__room">
                                                <TypeDot code=controller_type.code() />
                                                <span>{controller_type.display_name()}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>{room}</TableCell>
                                        <TableCell>
                                            <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                                        </TableCell>
                                        <TableCell>
                                            <span class=format!("condition condition--{}", condition_modifier(condition))>
                                                {condition.display_name()}
                                            </span>
                                        </TableCell>
                                        <TableCell>
                                            <BatteryGauge level=battery_level band=battery_band />
                                        </TableCell>
                                        <TableCell>{hours_used}</TableCell>
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
                    key=|c| c.controller_id.clone()
                    children=move |controller| {
                        let for_view = controller.clone();
                        let id_edit = controller.controller_id.clone();
                        let id_delete = controller.controller_id.clone();
                        let controller_id = controller.controller_id.clone();
                        let controller_name = controller.controller_name.clone();
                        let type_code = controller.controller_type.code();
                        let room = room_label(controller.room_assigned.as_deref());
                        let status = controller.status;
                        let battery_level = controller.battery_level;
                        let battery_band = controller.battery_band().map(|b| b.css_modifier());
                        view! {
                            <div class="record-card">
                                <div class="record-card__header">
                                    <div class="table__room">
                                        <TypeDot code=type_code />
                                        <div class="table__stack">
                                            <span class="record-card__title">{controller_name}</span>
                                            <span class="table__muted">{controller_id}</span>
                                        </div>
                                    </div>
                                    <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                                </div>
                                <div class="record-card__body">
                                    <div class="record-card__meta">
                                        {icon("map-pin")}
                                        <span>{room}</span>
                                    </div>
                                    <div class="record-card__meta">
                                        {icon("battery")}
                                        <BatteryGauge level=battery_level band=battery_band />
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
        state.with(|s| s.detail.selected().cloned()).map(|controller| {
            let id_edit = controller.controller_id.clone();
            let controller_id = controller.controller_id.clone();
            let controller_name = controller.controller_name.clone();
            let controller_type = controller.controller_type;
            let status = controller.status;
            let battery_level = controller.battery_level;
            let battery_band = controller.battery_band().map(|b| b.css_modifier());
            let room = controller.room_assigned.clone();
            let condition = controller.condition;
            let purchase_date = controller.purchase_date.clone();
            let last_maintenance = controller.last_maintenance.clone();
            let hours_used = controller.hours_used;
            let serial_number = controller.serial_number.clone();
            view! {
                <Modal
                    title="Controller Details"
                    subtitle=controller_id
                    on_close=close_details
                    footer=move || {
                        let edit_id = id_edit.clone();
                        view! {
                            <button class="modal-btn modal-btn--blue"
                                on:click=move |_| act(RecordAction::Update(edit_id.clone()))>
                                "Edit Controller"
                            </button>
                            <button class="modal-btn" on:click=move |_| close_details.run(())>"Close"</button>
                        }
                    }
                >
                    <div class="detail-person">
                        <div class=format!("room-badge room-badge--{}", controller_type.code())>
                            {icon("joystick")}
                        </div>
                        <div class="table__stack">
                            <span class="record-card__title">{controller_name}</span>
                            <span class="table__muted">{controller_type.display_name()}</span>
                        </div>
                    </div>
                    <div class="detail-grid">
                        <DetailField label="Status">
                            <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                        </DetailField>
                        <DetailField label="Battery" icon_name="battery">
                            <BatteryGauge level=battery_level band=battery_band />
                        </DetailField>
                        <ServiceFields
                            room=room
                            condition=condition
                            purchase_date=purchase_date
                            last_maintenance=last_maintenance
                            hours_used=hours_used
                            serial_number=serial_number
                        />
                    </div>
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id="a005_controller--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Controller Management"</h1>
                    <p class="page__subtitle">"Manage and monitor all PlayStation controller inventory"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| act(RecordAction::Create)>
                        {icon("plus")}
                        " Add Controller"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ActionNotice notice=notice />
                <StatGrid stats=stats />

                <FilterPanel result_count=Signal::derive(move || rows.with(Vec::len)) noun="controllers">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search_query placeholder="Search by controller ID, name, or serial number..." />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.status))
                            on_change=Callback::new(move |choice: Choice<EquipmentStatus>| state.update(|s| s.query.filters.status = choice))
                            all_label="All Status"
                        />
                    </Flex>
                </FilterPanel>

                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No controllers found" icon_name="joystick" /> }
                >
                    {move || if ctx.is_mobile.get() { cards_view().into_any() } else { table_view().into_any() }}
                </Show>
            </div>

            {modal_view}
        </PageFrame>
    }
}
