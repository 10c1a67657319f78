use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter bar: header with active-filter badge and pagination,
/// body with the filter widgets and the tags of applied filters
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of applied filters (badge)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    pagination_controls: ChildrenFn,

    #[prop(into)]
    filter_content: ChildrenFn,

    #[prop(optional, into)]
    filter_tags: Option<ChildrenFn>,

    /// Clear every applied filter
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls()}
                </div>
                {on_clear.map(|clear| view! {
                    <button
                        class="button button--ghost"
                        disabled=move || active_filters_count.get() == 0
                        on:click=move |_| clear.run(())
                    >
                        "Clear filters"
                    </button>
                })}
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                </div>
            </div>
            {filter_tags.as_ref().map(|tags| view! {
                <div class="filter-panel__tags">{tags()}</div>
            })}
        </div>
    }
}

/// Chip of one applied filter
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
