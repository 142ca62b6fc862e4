//! Building blocks of a list page's filter area: tab strip, search box,
//! categorical selects and the empty-result view.

use crate::shared::icons::icon;
use contracts::enums::ClosedSet;
use contracts::shared::filter::{Choice, TabBucket};
use leptos::prelude::*;
use thaw::Input;

/// Filter card with a live result count in its header.
#[component]
pub fn FilterPanel(
    #[prop(into)] result_count: Signal<usize>,
    /// Plural noun for the count, e.g. "bookings".
    noun: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                </div>
                <div class="filter-panel-header__right">
                    {move || format!("{} {}", result_count.get(), noun)}
                </div>
            </div>
            <div class="filter-panel-content">{children()}</div>
        </div>
    }
}

#[component]
pub fn TabStrip<T>(#[prop(into)] active: Signal<T>, on_select: Callback<T>) -> impl IntoView
where
    T: TabBucket + Send + Sync,
{
    view! {
        <div class="tab-strip" role="tablist">
            {T::tabs()
                .iter()
                .copied()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-strip__tab"
                            class:tab-strip__tab--active=move || active.get() == tab
                            role="tab"
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn SearchInput(value: RwSignal<String>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <Input value=value placeholder=placeholder />
        </div>
    }
}

/// `<select>` over a closed set with a leading catch-all option.
#[component]
pub fn ChoiceSelect<T>(
    #[prop(into)] value: Signal<Choice<T>>,
    on_change: Callback<Choice<T>>,
    /// Label of the catch-all option, e.g. "All Status".
    all_label: &'static str,
) -> impl IntoView
where
    T: ClosedSet + Send + Sync,
{
    view! {
        <select
            class="filter-select"
            on:change=move |ev| on_change.run(Choice::from_code(&event_target_value(&ev)))
            prop:value=move || value.get().code()
        >
            {Choice::<T>::options()
                .into_iter()
                .map(|option| {
                    let label = if option.is_all() { all_label } else { option.label() };
                    view! {
                        <option value=option.code() selected=move || value.get() == option>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn EmptyState(title: &'static str, #[prop(optional)] icon_name: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon(icon_name.unwrap_or("inbox"))}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__text">"Try adjusting your search or filter criteria"</p>
        </div>
    }
}
