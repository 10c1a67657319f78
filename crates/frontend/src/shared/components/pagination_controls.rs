use crate::shared::config::app_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager for server-side paginated tables
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let total_pages = Signal::derive(move || {
        let size = page_size.get().max(1);
        total_count.get().div_ceil(size)
    });
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get(),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !at_end() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {app_config()
                    .tables
                    .page_size_options
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
