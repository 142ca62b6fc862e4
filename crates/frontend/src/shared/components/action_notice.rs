use crate::shared::icons::icon;
use leptos::prelude::*;

/// Transient message raised by a placeholder action button.
#[component]
pub fn ActionNotice(notice: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        notice.get().map(|text| {
            view! {
                <div class="alert alert--info" role="status">
                    {icon("alert-triangle")}
                    <span>{text}</span>
                    <button class="alert__close" on:click=move |_| notice.set(None)>
                        {icon("x")}
                    </button>
                </div>
            }
        })
    }
}
