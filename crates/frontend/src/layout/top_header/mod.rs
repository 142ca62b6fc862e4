//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Sidebar toggle
//! - Current page title
//! - Notifications bell and profile dropdown

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label_for_key;
use crate::shared::icons::icon;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

const PROFILE_MENU: &[(&str, &str)] = &[
    ("Profile", "user"),
    ("Settings", "settings"),
    ("Logout", "log-out"),
];

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");

    let fallback_title = StoredValue::new(config.brand.fallback_title.clone());
    let notifications = config.layout.notification_count;
    let profile_open = RwSignal::new(false);

    let title = move || {
        ctx.active.with(|key| {
            page_label_for_key(key)
                .map(str::to_string)
                .unwrap_or_else(|| fallback_title.get_value())
        })
    };

    view! {
        <header
            class="top-header"
            class:top-header--hidden=move || !ctx.navbar_visible.get()
        >
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn top-header__bell" title="Notifications">
                    {icon("bell")}
                    {(notifications > 0).then(|| view! {
                        <span class="top-header__badge">{notifications}</span>
                    })}
                </button>

                <div class="top-header__profile">
                    <button
                        class="top-header__user"
                        on:click=move |_| profile_open.update(|open| *open = !*open)
                    >
                        <span class="avatar avatar--small">"AD"</span>
                        <span class="top-header__user-name">"Admin"</span>
                        {icon("chevron-down")}
                    </button>
                    <Show when=move || profile_open.get()>
                        <div class="top-header__dropdown">
                            {PROFILE_MENU.iter().map(|(label, icon_name)| {
                                view! {
                                    <button
                                        class="top-header__dropdown-item"
                                        on:click=move |_| {
                                            leptos::logging::log!("profile menu: '{}' is not wired", label);
                                            profile_open.set(false);
                                        }
                                    >
                                        {icon(icon_name)}
                                        <span>{*label}</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
