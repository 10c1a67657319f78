//! Filter bar of a data table, driven by the table filter registry

use contracts::shared::choices::{Choice, ChoiceState, RemoteChoices};
use contracts::shared::table_filters::{
    table_filters, ActiveFilters, FilterSet, FilterType, LoadedChoices, TableFilter,
};
use leptos::children::ToChildren;
use leptos::prelude::*;

use crate::shared::choices::RemoteChoiceLoader;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::settings::use_feature_flags;

#[component]
pub fn TableFilterPanel(
    /// Registry identifier of the table ("stock", "part", ...)
    #[prop(into)]
    table: String,

    active: RwSignal<ActiveFilters>,

    pagination_controls: ChildrenFn,
) -> impl IntoView {
    let flags = use_feature_flags().flags;
    let filters: Memo<FilterSet> = Memo::new(move |_| table_filters(&table, &flags.get()));
    let is_expanded = RwSignal::new(false);
    let active_count = Signal::derive(move || active.with(|a| a.len()));
    // labels for tags of server-side choice filters
    let loaded = RwSignal::new(LoadedChoices::new());

    let filter_content = ChildrenFn::to_children(move || {
        view! {
            <div class="table-filters">
                <For
                    each=move || filters.get().into_values()
                    key=|filter| filter.name.clone()
                    children=move |filter| view! { <FilterWidget filter=filter active=active loaded=loaded /> }
                />
            </div>
        }
    });

    let filter_tags = ChildrenFn::to_children(move || {
        view! {
            <For
                each=move || loaded.with(|l| active.with(|a| a.tags(&filters.get(), l)))
                key=|(name, label)| format!("{name}={label}")
                children=move |(name, label)| {
                    view! {
                        <FilterTag
                            label=label
                            on_remove=Callback::new(move |_| active.update(|a| a.remove(&name)))
                        />
                    }
                }
            />
        }
    });

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_count
            pagination_controls=pagination_controls
            filter_content=filter_content
            filter_tags=filter_tags
            on_clear=Callback::new(move |_| active.update(|a| a.clear()))
        />
    }
}

#[component]
fn FilterWidget(
    filter: TableFilter,
    active: RwSignal<ActiveFilters>,
    loaded: RwSignal<LoadedChoices>,
) -> impl IntoView {
    let name = filter.name.clone();
    let current = Signal::derive({
        let name = name.clone();
        move || active.with(|a| a.get(&name).map(str::to_string).unwrap_or_default())
    });
    let on_change = Callback::new(move |value: String| {
        active.update(|a| {
            if value.is_empty() {
                a.remove(&name);
            } else {
                a.set(&name, value);
            }
        })
    });

    let widget = match filter.inferred_type() {
        FilterType::Boolean => {
            let choices = vec![Choice::new("true", "Yes"), Choice::new("false", "No")];
            view! { <StaticChoiceSelect choices=choices value=current on_change=on_change /> }
                .into_any()
        }
        FilterType::Choice | FilterType::Api => match (&filter.choices, filter.lookup_source()) {
            (Some(choices), _) => view! {
                <StaticChoiceSelect choices=choices.clone() value=current on_change=on_change />
            }
            .into_any(),
            (None, Some(source)) => {
                let name = filter.name.clone();
                let on_loaded = Callback::new(move |choices: Vec<Choice>| {
                    loaded.update(|l| {
                        l.insert(name.clone(), choices);
                    })
                });
                view! {
                    <RemoteChoiceSelect source=source value=current on_change=on_change on_loaded=on_loaded />
                }
                .into_any()
            }
            (None, None) => view! { <TextFilterInput value=current on_change=on_change /> }.into_any(),
        },
        FilterType::Date => view! {
            <input
                type="date"
                class="filter-input"
                prop:value=move || current.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any(),
        FilterType::Text => view! { <TextFilterInput value=current on_change=on_change /> }.into_any(),
    };

    view! {
        <div class="form-group filter-widget" title=filter.description.clone().unwrap_or_default()>
            <label>{filter.label.clone()}</label>
            {widget}
        </div>
    }
}

#[component]
fn TextFilterInput(value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
    view! {
        <input
            type="text"
            class="filter-input"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}

#[component]
fn StaticChoiceSelect(
    choices: Vec<Choice>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"-"</option>
            {choices
                .into_iter()
                .map(|c| {
                    let option_value = c.value.clone();
                    view! {
                        <option value=c.value selected=move || value.get() == option_value>
                            {c.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Select whose options are fetched the first time it gets focus
#[component]
fn RemoteChoiceSelect(
    source: RemoteChoices,
    value: Signal<String>,
    on_change: Callback<String>,
    on_loaded: Callback<Vec<Choice>>,
) -> impl IntoView {
    let loader = RemoteChoiceLoader::new();
    // a preselected value needs its label right away
    if !value.get_untracked().is_empty() {
        loader.open(source.clone());
    }
    Effect::new(move |_| {
        if let ChoiceState::Loaded(choices) = loader.state.get() {
            on_loaded.run(choices);
        }
    });

    let options = move || match loader.state.get() {
        ChoiceState::NotLoaded => {
            let current = value.get();
            (!current.is_empty())
                .then(|| view! { <option value=current.clone() selected=true>{current.clone()}</option> })
                .into_any()
        }
        ChoiceState::Loading => view! { <option disabled=true>"Loading..."</option> }.into_any(),
        ChoiceState::Loaded(choices) => choices
            .into_iter()
            .map(|c| {
                let selected = value.get() == c.value;
                view! { <option value=c.value selected=selected>{c.label}</option> }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:focus=move |_| loader.open(source.clone())
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"-"</option>
            {options}
        </select>
    }
}
