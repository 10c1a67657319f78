//! Tabbed panel area of a detail page.
//!
//! Static panels come from the page; plugin panels are fetched for the
//! displayed instance when the plugin interface is enabled. The selected
//! panel is remembered per page in the UI state store.

use contracts::shared::panels::{
    compose_panels, parse_plugin_panels, select_panel, PanelDescriptor, PanelGroupSpec,
    PanelLayout, PanelSource, PluginPanel, PluginPanelQuery, PLUGINS_ID,
};
use contracts::shared::requests::RequestTracker;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::get_value;
use crate::shared::icons::icon;
use crate::shared::settings::use_feature_flags;
use crate::shared::storage::with_ui_state;

#[component]
pub fn PanelGroup(
    /// Key under which the last selected panel is stored
    #[prop(into)]
    page: String,

    #[prop(into)]
    panels: Signal<Vec<PanelDescriptor>>,

    #[prop(optional)]
    groups: Vec<PanelGroupSpec>,

    /// Target model for plugin panels (`part`, `stockitem`, ...)
    #[prop(optional, into)]
    model: Option<String>,

    #[prop(into)]
    instance_id: Signal<Option<String>>,

    /// Panel requested by the URL
    #[prop(optional_no_strip)]
    url_panel: Option<String>,

    render_panel: Callback<String, AnyView>,

    #[prop(optional)]
    on_select: Option<Callback<String>>,
) -> impl IntoView {
    let flags = use_feature_flags().flags;
    let plugin_panels = RwSignal::new(Vec::<PluginPanel>::new());
    let tracker = StoredValue::new(RequestTracker::new());

    Effect::new(move |_| {
        let flags = flags.get();
        let id = instance_id.get();
        let Some(query) = PluginPanelQuery::for_instance(&flags, model.as_deref(), id.as_deref())
        else {
            tracker.update_value(|t| t.cancel(PLUGINS_ID));
            plugin_panels.set(Vec::new());
            return;
        };

        let Some(ticket) = tracker.try_update_value(|t| t.begin(PLUGINS_ID)) else {
            return;
        };
        spawn_local(async move {
            let params: Vec<(String, String)> = query
                .query_pairs()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            let result = get_value(PluginPanelQuery::ENDPOINT, &params).await;

            let current = tracker.try_update_value(|t| t.complete(&ticket)).unwrap_or(false);
            if !current {
                log::debug!("Dropping stale plugin panel response for {}", query.target_id);
                return;
            }
            match result {
                Ok(body) => plugin_panels.set(parse_plugin_panels(&body)),
                Err(e) => {
                    log::warn!("Failed to load plugin panels: {}", e);
                    plugin_panels.set(Vec::new());
                }
            }
        });
    });

    on_cleanup(move || {
        let _ = tracker.try_update_value(|t| t.cancel_all());
    });

    let layout: Memo<PanelLayout> =
        Memo::new(move |_| plugin_panels.with(|plugins| compose_panels(panels.get(), &groups, plugins)));

    let page = StoredValue::new(page);
    let selected = RwSignal::new(None::<String>);
    Effect::new(move |_| {
        let current = selected.get_untracked();
        let last = page.with_value(|p| with_ui_state(|s| s.last_panel(p)));
        let wanted = current.as_deref().or(url_panel.as_deref());
        let pick = layout.with(|l| select_panel(l, wanted, last.as_deref()));
        if pick != current {
            if let (Some(name), Some(cb)) = (pick.clone(), on_select) {
                cb.run(name);
            }
            selected.set(pick);
        }
    });

    let choose = move |name: String| {
        page.with_value(|p| with_ui_state(|s| s.set_last_panel(p, &name)));
        selected.set(Some(name.clone()));
        if let Some(cb) = on_select {
            cb.run(name);
        }
    };

    let tabs = move || {
        layout
            .get()
            .groups
            .into_iter()
            .map(|group| {
                let buttons = group
                    .panels
                    .iter()
                    .filter_map(|name| layout.with_untracked(|l| l.panel(name).cloned()))
                    .filter(|panel| !panel.hidden)
                    .map(|panel| {
                        let name = panel.name.clone();
                        let is_selected = {
                            let name = name.clone();
                            move || selected.get().as_deref() == Some(name.as_str())
                        };
                        view! {
                            <button
                                class="panel-tabs__item"
                                class:panel-tabs__item--active=is_selected
                                disabled=panel.disabled
                                on:click=move |_| choose(name.clone())
                            >
                                {panel.icon.as_deref().map(icon)}
                                <span>{panel.label.clone()}</span>
                                {panel.notification_dot.then(|| view! { <span class="panel-tabs__dot"></span> })}
                            </button>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="panel-tabs__group" data-group=group.id>
                        {(!group.label.is_empty()).then(|| view! {
                            <div class="panel-tabs__group-label">{group.label}</div>
                        })}
                        {buttons}
                    </div>
                }
            })
            .collect_view()
    };

    let content = move || {
        let name = selected.get()?;
        let panel = layout.with(|l| l.panel(&name).cloned())?;
        Some(match panel.source {
            PanelSource::Static => render_panel.run(name),
            PanelSource::Plugin { plugin_name, source } => view! {
                <PluginPanelView label=panel.label plugin_name=plugin_name source=source />
            }
            .into_any(),
        })
    };

    view! {
        <div class="panel-group">
            <nav class="panel-tabs">{tabs}</nav>
            <section class="panel-group__content">
                {move || content().unwrap_or_else(|| view! {
                    <div class="panel-group__empty">"No panels available"</div>
                }.into_any())}
            </section>
        </div>
    }
}

#[component]
fn PluginPanelView(label: String, plugin_name: String, source: Option<String>) -> impl IntoView {
    let data_plugin = plugin_name.clone();
    view! {
        <div class="plugin-panel" data-plugin=data_plugin>
            <h3 class="plugin-panel__title">{icon("plug")} {label}</h3>
            <p class="plugin-panel__origin">"Provided by plugin " <strong>{plugin_name}</strong></p>
            {match source {
                Some(src) => view! {
                    <a class="plugin-panel__source" href=src target="_blank">"Open panel source"</a>
                }
                .into_any(),
                None => view! { <p>"This panel has no content source."</p> }.into_any(),
            }}
        </div>
    }
}
