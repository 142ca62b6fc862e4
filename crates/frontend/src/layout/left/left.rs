use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar frame. On mobile it slides over the content with a dimming
/// overlay that closes it on tap.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_open = move || ctx.left_open.get();
    let show_overlay = move || ctx.is_mobile.get() && ctx.left_open.get();

    view! {
        <Show when=show_overlay>
            <div class="sidebar-overlay" on:click=move |_| ctx.close_left()></div>
        </Show>
        <aside
            data-zone="left"
            class="left"
            class:left--mobile=move || ctx.is_mobile.get()
            class:hidden=move || !is_open()
        >
            {children()}
        </aside>
    }
}
