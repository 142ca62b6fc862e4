mod state;

use contracts::domain::a007_food::{registry, FoodCategory, FoodItem, FoodStatus};
use contracts::enums::ClosedSet;
use contracts::shared::filter::Choice;
use contracts::shared::query::{RecordAction, ResourceQuery};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::action_notice::ActionNotice;
use crate::shared::components::filter_panel::{ChoiceSelect, EmptyState, FilterPanel, SearchInput, TabStrip};
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{dispatch_action, record_json};
use crate::shared::modal::{DetailField, Modal};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn status_variant(status: FoodStatus) -> &'static str {
    match status {
        FoodStatus::Available => "success",
        FoodStatus::OutOfStock => "error",
        FoodStatus::Discontinued => "neutral",
    }
}

fn category_icon(category: FoodCategory) -> &'static str {
    match category {
        FoodCategory::Makanan => "utensils",
        FoodCategory::Minuman => "coffee",
        FoodCategory::Snack => "package",
    }
}

#[component]
pub fn FoodList() -> impl IntoView {
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

    let open_details = move |item: FoodItem| {
        log!("food item details: {}", record_json(&item));
        state.update(|s| s.detail.open(item));
    };
    let close_details = Callback::new(move |_| state.update(|s| s.detail.close()));
    let act = move |action: RecordAction| dispatch_action(&source, action, notice);

    let on_status = Callback::new(move |choice: Choice<FoodStatus>| {
        state.update(|s| {
            s.query.filters.status = choice;
            s.query.tab = s.query.tab.after_status_change(choice);
        })
    });

    let table_view = move || {
        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=200.0>"Food Item"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=100.0>"Category"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Price"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0>"Stock"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get()
                            key=|f| f.id
                            children=move |item| {
                                let for_view = item.clone();
                                let id_edit = item.id.to_string();
                                let id_delete = item.id.to_string();
                                let name = item.name.clone();
                                let description = item.description.clone().unwrap_or_default();
                                let category = item.category;
                                let price = format_money(item.price);
                                let stock = item.stock_label();
                                let sold = item.sold_label();
                                let status = item.status;
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <div class="table__stack">
                                                    <span class="table__strong">{name}</span>
                                                    <span class="table__muted">{description}</span>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__room">
                                                {icon(category_icon(category))}
                                                <span>{category.display_name()}</span>
                                            </div>
                                        </TableCell>
                                        <TableCell>
                                            <span class="table__strong">{price}</span>
                                        </TableCell>
                                        <TableCell>
                                            <div class="table__stack">
                                                <span>{stock}</span>
                                                <span class="table__muted">{sold}</span>
                                            </div>
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
                    key=|f| f.id
                    children=move |item| {
                        let for_view = item.clone();
                        let id_edit = item.id.to_string();
                        let id_delete = item.id.to_string();
                        let name = item.name.clone();
                        let category = item.category;
                        let price = format_money(item.price);
                        let stock = format!("{} · {}", item.stock_label(), item.sold_label());
                        let status = item.status;
                        view! {
                            <div class="record-card">
                                <div class="record-card__header">
                                    <div class="table__room">
                                        {icon(category_icon(category))}
                                        <div class="table__stack">
                                            <span class="record-card__title">{name}</span>
                                            <span class="table__muted">{category.display_name()}</span>
                                        </div>
                                    </div>
                                    <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                                </div>
                                <div class="record-card__body">
                                    <div class="record-card__meta">
                                        {icon("dollar-sign")}
                                        <span>{price}</span>
                                    </div>
                                    <div class="record-card__meta">
                                        {icon("package")}
                                        <span>{stock}</span>
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
        state.with(|s| s.detail.selected().cloned()).map(|item| {
            let id_edit = item.id.to_string();
            let id_delete = item.id.to_string();
            let category = item.category;
            let name = item.name.clone();
            let description = item.description.clone();
            let price = format_money(item.price);
            let stock = item.stock_label();
            let sold = item.sold_label();
            let status = item.status;
            view! {
                <Modal
                    title="Food Item Details"
                    subtitle=category.display_name()
                    on_close=close_details
                    footer=move || {
                        let edit_id = id_edit.clone();
                        let delete_id = id_delete.clone();
                        view! {
                            <button class="modal-btn modal-btn--blue"
                                on:click=move |_| act(RecordAction::Update(edit_id.clone()))>
                                "Edit"
                            </button>
                            <button class="modal-btn modal-btn--red"
                                on:click=move |_| act(RecordAction::Delete(delete_id.clone()))>
                                "Delete"
                            </button>
                            <button class="modal-btn" on:click=move |_| close_details.run(())>"Close"</button>
                        }
                    }
                >
                    <div class="detail-person">
                        <div class="room-badge room-badge--food">{icon(category_icon(category))}</div>
                        <div class="table__stack">
                            <span class="record-card__title">{name}</span>
                            {description.map(|text| view! {
                                <span class="table__muted">{text}</span>
                            })}
                        </div>
                    </div>
                    <div class="detail-grid">
                        <DetailField label="Price" icon_name="dollar-sign">{price}</DetailField>
                        <DetailField label="Stock" icon_name="package">{stock}</DetailField>
                        <DetailField label="Sold" icon_name="trending-up">{sold}</DetailField>
                        <DetailField label="Status">
                            <Badge variant=status_variant(status)>{status.display_name()}</Badge>
                        </DetailField>
                    </div>
                </Modal>
            }
        })
    };

    view! {
        <PageFrame page_id="a007_food--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Food Menu Management"</h1>
                    <p class="page__subtitle">"Manage and monitor all food menu items"</p>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| act(RecordAction::Create)>
                        {icon("plus")}
                        " Add Food Menu"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ActionNotice notice=notice />

                <TabStrip
                    active=Signal::derive(move || state.with(|s| s.query.tab))
                    on_select=Callback::new(move |tab| state.update(|s| s.query.tab = tab))
                />

                <FilterPanel result_count=Signal::derive(move || rows.with(Vec::len)) noun="items">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput value=search_query placeholder="Search by food name or description..." />
                        <ChoiceSelect
                            value=Signal::derive(move || state.with(|s| s.query.filters.status))
                            on_change=on_status
                            all_label="All Status"
                        />
                    </Flex>
                </FilterPanel>

                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No menu items found" icon_name="utensils" /> }
                >
                    {move || if ctx.is_mobile.get() { cards_view().into_any() } else { table_view().into_any() }}
                </Show>
            </div>

            {modal_view}
        </PageFrame>
    }
}
