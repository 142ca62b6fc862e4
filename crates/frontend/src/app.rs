use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|err| {
        log::warn!("embedded config rejected, using defaults: {err:#}");
        AppConfig::default()
    });
    log::info!("{} admin starting", config.brand.name);

    // Layout state shared by the shell and every page.
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <MainLayout />
    }
}
