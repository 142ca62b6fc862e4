//! Sidebar with the brand block and collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label_for_key;
use crate::shared::icons::icon;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (page key, icon)
}

impl MenuGroup {
    /// Group that is itself a page.
    fn leaf(id: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            label: page_label_for_key(id).unwrap_or(id),
            icon,
            items: vec![],
        }
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup::leaf("d400_overview", "layout-dashboard"),
        MenuGroup::leaf("a002_rental_unit", "gamepad"),
        MenuGroup::leaf("a001_booking", "calendar"),
        MenuGroup {
            id: "manage",
            label: "Manage",
            icon: "folder",
            items: vec![
                ("a008_user", "users"),
                ("a003_room", "home"),
                ("a007_food", "utensils"),
            ],
        },
        MenuGroup {
            id: "inventory",
            label: "Inventory",
            icon: "package",
            items: vec![
                ("a004_console", "gamepad"),
                ("a005_controller", "joystick"),
                ("a006_tv", "tv"),
            ],
        },
        MenuGroup::leaf("transaction", "credit-card"),
        MenuGroup::leaf("analysis_report", "bar-chart"),
        MenuGroup::leaf("settings", "settings"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");

    let expanded_groups = RwSignal::new(vec!["manage".to_string(), "inventory".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar">
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("gamepad")}</div>
                <span class="app-sidebar__brand-name">{config.brand.name.clone()}</span>
                <Show when=move || ctx.is_mobile.get()>
                    <button class="app-sidebar__close" on:click=move |_| ctx.close_left()>
                        {icon("x")}
                    </button>
                </Show>
            </div>

            <nav class="app-sidebar__content">
                {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let has_children = !group.items.is_empty();

                    let group_id_stored = StoredValue::new(group_id.clone());
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();
                    let page_key = group.id;

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    let gid = group_id_stored.get_value();
                                    !has_children && ctx.active.with(|a| a == &gid)
                                }
                                on:click=move |_| {
                                    if has_children {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    } else {
                                        ctx.open_page(page_key);
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                {has_children.then(|| {
                                    let gid_exp = group_id_for_exp.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__chevron"
                                            class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                        >
                                            {icon("chevron-right")}
                                        </div>
                                    }
                                })}
                            </div>

                            {has_children.then(|| {
                                let gid_show = group_id.clone();
                                let items_stored = StoredValue::new(group.items.clone());
                                view! {
                                    <Show when=move || expanded_groups.get().contains(&gid_show)>
                                        <div class="app-sidebar__children">
                                            {items_stored.get_value().into_iter().map(|(key, icon_name)| {
                                                view! {
                                                    <div
                                                        class="app-sidebar__item app-sidebar__item--child"
                                                        class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
                                                        on:click=move |_| ctx.open_page(key)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{page_label_for_key(key).unwrap_or(key)}</span>
                                                        </div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    </Show>
                                }
                            })}
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_entry_has_a_label() {
        for group in get_menu_groups() {
            if group.items.is_empty() {
                assert!(page_label_for_key(group.id).is_some(), "{}", group.id);
            }
            for (key, _) in group.items {
                assert!(page_label_for_key(key).is_some(), "{}", key);
            }
        }
    }

    #[test]
    fn test_menu_order() {
        let ids: Vec<_> = get_menu_groups().iter().map(|g| g.id).collect();
        assert_eq!(
            ids,
            vec![
                "d400_overview",
                "a002_rental_unit",
                "a001_booking",
                "manage",
                "inventory",
                "transaction",
                "analysis_report",
                "settings",
            ]
        );
    }
}
