mod state;

use contracts::domain::a002_rental_unit::{registry, rental_stats, RentalUnit, UnitStatus};
use contracts::enums::ClosedSet;
use contracts::shared::filter::Choice;
use contracts::shared::query::{RecordAction, ResourceQuery};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::action_notice::ActionNotice;
use crate::shared::components::filter_panel::{ChoiceSelect, EmptyState, FilterPanel, SearchInput, TabStrip};
use crate::shared::components::stat_card::StatGrid;
use crate::shared::components::ui::{Badge, TypeDot};
use crate::shared::icons::icon;
use crate::shared::list_utils::{dispatch_action, record_json};
use crate::shared::modal::{DetailField, Modal};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_variant(status: UnitStatus) -> &'static str {
    match status {
        UnitStatus::Available => "success",
        UnitStatus::InUse => "primary",
        UnitStatus::Offline => "error",
    }
}

/// Rental floor: every unit as a card, at every viewport width.
#[component]
pub fn RentalUnitList() -> impl IntoView {
    let state = create_state();
    let source = registry();
    let notice = RwSignal::new(None::<String>);
    let search_query = RwSignal::new(String::new());

    Effect::new(move |_| {
        let term = search_query.get();
        untrack(move || state.update(|s| s.query.search = term));
    });

    let rows = Memo::new(move |_| state.with(|s| source.list(&s.query)));
    let stats = rental_stats(source.records());

    let open_details = move |unit: RentalUnit| {
        log!("rental unit details: {}", record_json(&unit));
        state.update(|s| s.detail.open(unit));
    };
    let close_details = Callback::new(move |_| state.update(|s| s.detail.close()));
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    let unit_card = move |unit: RentalUnit| {
        let number = unit.number.clone();
        let body = match unit.session.clone() {
            Some(session) if unit.status == UnitStatus::InUse => view! {
                <div class="unit-card__session">
                    <div class="record-card__meta">{icon("user")}<span>{session.user}</span></div>
                    <div class="record-card__meta">
                        {icon("clock")}
                        <span>{format!("{} → {}", session.start_time, session.end_time)}</span>
                    </div>
                    <div class="unit-card__time-left">
                        <span class="table__muted">"Time Left"</span>
                        <span class="unit-card__time-value">{session.time_left}</span>
                    </div>
                </div>
            }
            .into_any(),
            _ => {
                let text = if unit.status == UnitStatus::Available { "Ready for rental" } else { "Unit offline" };
                view! { <div class="unit-card__idle">{text}</div> }.into_any()
            }
        };

        let actions = match unit.status {
            UnitStatus::InUse => {
                let (food_id, print_id) = (number.clone(), number.clone());
                let for_view = unit.clone();
                view! {
                    <div class="unit-card__actions">
                        <button class="chip-btn chip-btn--orange" on:click=move |_| act(RecordAction::OrderFood(food_id.clone()))>
                            {icon("coffee")}" Add Food"
                        </button>
                        <button class="chip-btn chip-btn--blue" on:click=move |_| open_details(for_view.clone())>
                            {icon("eye")}" Show"
                        </button>
                        <button class="chip-btn chip-btn--green chip-btn--wide" on:click=move |_| act(RecordAction::Print(print_id.clone()))>
                            {icon("printer")}" Print Receipt"
                        </button>
                    </div>
                }
                .into_any()
            }
            UnitStatus::Available => {
                let start_id = number.clone();
                view! {
                    <button class="primary-btn primary-btn--wide" on:click=move |_| act(RecordAction::StartSession(start_id.clone()))>
                        {icon("play")}" Start Rental"
                    </button>
                }
                .into_any()
            }
            UnitStatus::Offline => view! {
                <button class="primary-btn primary-btn--wide primary-btn--disabled" disabled=true>
                    {icon("pause")}" Unit Offline"
                </button>
            }
            .into_any(),
        };

        view! {
            <div class=format!("unit-card unit-card--{}", unit.status.code())>
                <div class="unit-card__header">
                    <div class=format!("unit-card__badge unit-card__badge--{}", unit.unit_type.code())>
                        {icon("gamepad")}
                    </div>
                    <Badge variant=status_variant(unit.status)>{unit.status.display_name()}</Badge>
                </div>
                <h3 class="unit-card__number">{number}</h3>
                {body}
                <div class="unit-card__footer">{actions}</div>
            </div>
        }
    };

    let modal_view = move || {
        state.with(|s| s.detail.selected().cloned()).map(|unit| {
            view! {
                <Modal title="Rental Session" subtitle=unit.number.clone() on_close=close_details>
                    <div class="detail-grid">
                        <DetailField label="Type" icon_name="gamepad">
                            <TypeDot code=unit.unit_type.code() />
                            {format!(" {}", unit.unit_type)}
                        </DetailField>
                        <DetailField label="Status">
                            <Badge variant=status_variant(unit.status)>{unit.status.display_name()}</Badge>
                        </DetailField>
                        {unit.session.clone().map(|session| view! {
                            <DetailField label="Customer" icon_name="user">{session.user}</DetailField>
                            <DetailField label="Session" icon_name="clock">
                                {format!("{} - {}", session.start_time, session.end_time)}
                            </DetailField>
                            <DetailField label="Time Left" icon_name="clock">{session.time_left}</DetailField>
                        })}
                    </div>
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id="a002_rental_unit--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"PlayStation Rentals"</h1>
                    <p class="page__subtitle">"Manage and monitor all PlayStation rental units"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| act(RecordAction::Create)>
                        {icon("plus")}
                        " Start New Rent"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ActionNotice notice=notice />
                <StatGrid stats=stats />

                <TabStrip
                    active=Signal::derive(move || state.with(|s| s.query.tab))
                    on_select=Callback::new(move |tab| state.update(|s| s.query.tab = tab))
                />

                <FilterPanel result_count=Signal::derive(move || rows.with(Vec::len)) noun="units">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search_query placeholder="Search by unit number or user name..." />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.status))
                            on_change=Callback::new(move |choice: Choice<UnitStatus>| state.update(|s| s.query.filters.status = choice))
                            all_label="All Status"
                        />
                    </Flex>
                </FilterPanel>

                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No units found" icon_name="gamepad" /> }
                >
                    <div class="unit-grid">
                        <For
                            each=move || rows.get()
                            key=|u| u.number.clone()
                            children=unit_card
                        />
                    </div>
                </Show>
            </div>

            {modal_view}
        </PageFrame>
    }
}
