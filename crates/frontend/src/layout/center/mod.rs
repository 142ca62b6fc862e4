use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <main
            data-zone="center"
            class="app-content"
            class:app-content--mobile=move || ctx.is_mobile.get()
        >
            {children()}
        </main>
    }
}
