use leptos::prelude::*;

/// Rounded status pill.
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error", "info" or "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "info" => "badge--info",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}

/// Initials in a coloured circle.
#[component]
pub fn Avatar(#[prop(into)] initials: String) -> impl IntoView {
    view! { <span class="avatar">{initials}</span> }
}

/// Small colour dot keyed by a closed-set code (`ps4`, `vip`, ...).
#[component]
pub fn TypeDot(code: &'static str) -> impl IntoView {
    view! { <span class=format!("type-dot type-dot--{}", code)></span> }
}
