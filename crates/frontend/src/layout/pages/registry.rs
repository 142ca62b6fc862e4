//! Page registry: the only place that maps a page key to its view.

use super::page_labels::page_label_for_key;
use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_booking::ui::list::BookingList;
use crate::domain::a002_rental_unit::ui::list::RentalUnitList;
use crate::domain::a003_room::ui::list::RoomList;
use crate::domain::a004_console::ui::list::ConsoleList;
use crate::domain::a005_controller::ui::list::ControllerList;
use crate::domain::a006_tv::ui::list::TvList;
use crate::domain::a007_food::ui::list::FoodList;
use crate::domain::a008_user::ui::list::UserList;
use crate::shared::icons::icon;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the page for `key`, or a placeholder for pages that do not
/// exist yet.
pub fn render_page_content(key: &str) -> AnyView {
    match key {
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        "a001_booking" => view! { <BookingList /> }.into_any(),
        "a002_rental_unit" => view! { <RentalUnitList /> }.into_any(),
        "a003_room" => view! { <RoomList /> }.into_any(),
        "a004_console" => view! { <ConsoleList /> }.into_any(),
        "a005_controller" => view! { <ControllerList /> }.into_any(),
        "a006_tv" => view! { <TvList /> }.into_any(),
        "a007_food" => view! { <FoodList /> }.into_any(),
        "a008_user" => view! { <UserList /> }.into_any(),

        _ => {
            log!("no page registered for '{}'", key);
            let title = page_label_for_key(key).unwrap_or("Page").to_string();
            view! {
                <div class="placeholder">
                    {icon("layout-dashboard")}
                    <h2 class="placeholder__title">{title}</h2>
                    <p class="placeholder__text">"This page is not available yet."</p>
                </div>
            }
            .into_any()
        }
    }
}
