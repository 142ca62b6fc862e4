use crate::shared::icons::icon;
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

/// Previous/next controls with numbered pages. Renders nothing for a
/// single page.
#[component]
pub fn PaginationControls(
    #[prop(into)] window: Signal<PageWindow>,
    /// Receives the 1-based page to show.
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || window.get().is_visible()>
            <div class="pagination-controls">
                <span class="pagination-info">{move || window.get().summary()}</span>
                <div class="pagination-controls__buttons">
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let w = window.get();
                            if w.has_prev() {
                                on_page_change.run(w.page - 1);
                            }
                        }
                        disabled=move || !window.get().has_prev()
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    {move || {
                        let w = window.get();
                        (1..=w.total_pages).map(|page| {
                            view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=page == w.page
                                    on:click=move |_| on_page_change.run(page)
                                >
                                    {page}
                                </button>
                            }
                        }).collect_view()
                    }}
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            let w = window.get();
                            if w.has_next() {
                                on_page_change.run(w.page + 1);
                            }
                        }
                        disabled=move || !window.get().has_next()
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </div>
        </Show>
    }
}
