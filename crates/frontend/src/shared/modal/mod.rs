use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Detail overlay. Closes on the X button, a backdrop click or Escape.
///
/// Mount it only while a record is selected; the Escape listener lives
/// as long as the modal does.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    on_close: Callback<()>,
    /// Action buttons shown under the body.
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|buttons| view! {
                    <div class="modal-footer">{buttons.run()}</div>
                })}
            </div>
        </div>
    }
}

/// Labelled value tile of a detail modal.
#[component]
pub fn DetailField(
    label: &'static str,
    #[prop(optional)] icon_name: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="detail-field">
            <div class="detail-field__label">
                {icon_name.map(icon)}
                <span>{label}</span>
            </div>
            <div class="detail-field__value">{children()}</div>
        </div>
    }
}
