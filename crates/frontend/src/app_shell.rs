//! Root layout of the admin panel: sidebar, top bar and the active page.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::pages::render_page_content;
use crate::layout::Shell;
use contracts::shared::config::AppConfig;
use leptos::logging::log;
use leptos::prelude::*;

/// Wires the URL and viewport listeners once, then renders the shell.
///
/// The center area re-renders on navigation, so page state (filters,
/// open modal) does not survive a page switch.
#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<AppConfig>().expect("AppConfig not found");

    ctx.init_router_integration();
    ctx.init_viewport_tracking(&config.layout);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || {
                        let key = ctx.active.get();
                        log!("rendering page '{}'", key);
                        render_page_content(&key)
                    }}
                }
                .into_any()
            }
        />
    }
}
