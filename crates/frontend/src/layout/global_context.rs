use crate::layout::pages::DEFAULT_PAGE;
use contracts::shared::config::LayoutConfig;
use contracts::shared::viewport::{is_mobile_width, navbar_visible};
use leptos::ev;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query string of the admin URL: `?page=a001_booking`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the page shown in the center area.
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    /// Viewport is narrower than the mobile breakpoint.
    pub is_mobile: RwSignal<bool>,
    pub navbar_visible: RwSignal<bool>,
    last_scroll: StoredValue<f64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_PAGE.to_string()),
            left_open: RwSignal::new(true),
            is_mobile: RwSignal::new(false),
            navbar_visible: RwSignal::new(true),
            last_scroll: StoredValue::new(0.0),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: PageQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.page.filter(|p| !p.is_empty()) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&PageQuery { page: Some(page) })
                .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Registers the single resize and scroll listeners of the app.
    /// Both are removed when the owning component is cleaned up.
    pub fn init_viewport_tracking(&self, layout: &LayoutConfig) {
        let breakpoint = layout.mobile_breakpoint_px;
        let threshold = layout.navbar_scroll_threshold_px;
        let this = *self;

        this.set_mobile(current_width().is_some_and(|w| is_mobile_width(w, breakpoint)));

        let resize = window_event_listener(ev::resize, move |_| {
            if let Some(width) = current_width() {
                this.set_mobile(is_mobile_width(width, breakpoint));
            }
        });

        let scroll = window_event_listener(ev::scroll, move |_| {
            let current = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let previous = this.last_scroll.get_value();
            let visible = navbar_visible(previous, current, this.is_mobile.get_untracked(), threshold);
            if this.navbar_visible.get_untracked() != visible {
                this.navbar_visible.set(visible);
            }
            this.last_scroll.set_value(current);
        });

        on_cleanup(move || {
            resize.remove();
            scroll.remove();
        });
    }

    /// Crossing the breakpoint closes the sidebar on mobile and reopens it
    /// on desktop. Staying on the same side keeps the user's choice.
    pub fn set_mobile(&self, mobile: bool) {
        if self.is_mobile.get_untracked() == mobile {
            return;
        }
        leptos::logging::log!("viewport mode: {}", if mobile { "mobile" } else { "desktop" });
        self.is_mobile.set(mobile);
        self.left_open.set(!mobile);
        if !mobile {
            self.navbar_visible.set(true);
        }
    }

    pub fn open_page(&self, key: &str) {
        leptos::logging::log!("open_page: key='{}'", key);
        if self.active.with_untracked(|active| active != key) {
            self.active.set(key.to_string());
        }
        if self.is_mobile.get_untracked() {
            self.left_open.set(false);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn close_left(&self) {
        self.left_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn current_width() -> Option<f64> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}
