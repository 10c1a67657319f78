use std::collections::HashSet;

use super::plugin::PluginPanel;
use super::types::{PanelDescriptor, PanelGroupSpec, PanelGroupView, PanelLayout};

pub const UNGROUPED_ID: &str = "ungrouped";
pub const PLUGINS_ID: &str = "plugins";

/// Give plugin panels names that do not clash with `existing`.
///
/// A clashing plugin panel becomes `pluginName-panelName`; if that is taken
/// too, a numeric suffix is added. Nothing is ever overwritten.
pub fn merge_plugin_panels(
    existing: &[PanelDescriptor],
    plugin_panels: Vec<PanelDescriptor>,
) -> Vec<PanelDescriptor> {
    let mut taken: HashSet<String> = existing.iter().map(|p| p.name.clone()).collect();
    let mut merged = Vec::with_capacity(plugin_panels.len());

    for mut panel in plugin_panels {
        if taken.contains(&panel.name) {
            let base = match panel.plugin_name() {
                Some(plugin) => format!("{}-{}", plugin, panel.name),
                None => panel.name.clone(),
            };
            let mut candidate = base.clone();
            let mut n = 2;
            while taken.contains(&candidate) {
                candidate = format!("{base}-{n}");
                n += 1;
            }
            panel.name = candidate;
        }
        taken.insert(panel.name.clone());
        merged.push(panel);
    }

    merged
}

/// Merge static panels, their groups and plugin panels into one layout.
pub fn compose_panels(
    static_panels: Vec<PanelDescriptor>,
    groups: &[PanelGroupSpec],
    plugin_panels: &[PluginPanel],
) -> PanelLayout {
    let mut panels: Vec<PanelDescriptor> = Vec::with_capacity(static_panels.len());
    for panel in static_panels {
        if panels.iter().any(|p| p.name == panel.name) {
            log::warn!("Duplicate static panel '{}' ignored", panel.name);
            continue;
        }
        panels.push(panel);
    }

    let mut assigned: HashSet<String> = HashSet::new();
    let mut group_views: Vec<PanelGroupView> = Vec::new();
    for group in groups {
        let members: Vec<String> = group
            .panel_names
            .iter()
            .filter(|name| panels.iter().any(|p| &p.name == *name))
            .filter(|name| assigned.insert((*name).clone()))
            .cloned()
            .collect();
        if !members.is_empty() {
            group_views.push(PanelGroupView {
                id: group.id.clone(),
                label: group.label.clone(),
                panels: members,
            });
        }
    }

    let leftover: Vec<String> = panels
        .iter()
        .filter(|p| !assigned.contains(&p.name))
        .map(|p| p.name.clone())
        .collect();
    if !leftover.is_empty() {
        group_views.push(PanelGroupView {
            id: UNGROUPED_ID.to_string(),
            label: String::new(),
            panels: leftover,
        });
    }

    let plugin_descriptors = merge_plugin_panels(
        &panels,
        plugin_panels.iter().map(PluginPanel::to_descriptor).collect(),
    );
    if !plugin_descriptors.is_empty() {
        group_views.push(PanelGroupView {
            id: PLUGINS_ID.to_string(),
            label: "Plugins".to_string(),
            panels: plugin_descriptors.iter().map(|p| p.name.clone()).collect(),
        });
    }
    panels.extend(plugin_descriptors);

    PanelLayout {
        panels,
        groups: group_views,
    }
}

/// Pick the panel to show: URL segment, then last used, then first active panel.
/// Only active panels qualify.
pub fn select_panel(
    layout: &PanelLayout,
    url_panel: Option<&str>,
    last_used: Option<&str>,
) -> Option<String> {
    url_panel
        .filter(|name| layout.is_active_panel(name))
        .or_else(|| last_used.filter(|name| layout.is_active_panel(name)))
        .map(str::to_string)
        .or_else(|| layout.active_panels().first().map(|p| p.name.clone()))
}

/// Panel segment of a detail URL: `/part/12/stock` under `/part/12` is `stock`
pub fn panel_from_path(path: &str, base: &str) -> Option<String> {
    let rest = path.strip_prefix(base.trim_end_matches('/'))?;
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    rest.trim_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn plugin(plugin_name: &str, key: &str) -> PluginPanel {
        PluginPanel {
            plugin_name: plugin_name.to_string(),
            key: key.to_string(),
            title: key.to_uppercase(),
            description: None,
            icon: None,
            source: None,
            context: None,
        }
    }

    fn static_panels() -> Vec<PanelDescriptor> {
        vec![
            PanelDescriptor::new("details", "Details"),
            PanelDescriptor::new("stock", "Stock"),
            PanelDescriptor::new("allocations", "Allocations"),
            PanelDescriptor::new("notes", "Notes"),
            PanelDescriptor::new("attachments", "Attachments"),
        ]
    }

    #[test]
    fn composition_counts_and_collision() {
        let groups = vec![
            PanelGroupSpec::new("main", "Main", &["details", "stock"]),
            PanelGroupSpec::new("orders", "Orders", &["allocations"]),
        ];
        let plugins = vec![plugin("sample", "stock"), plugin("sample", "graphs")];

        let layout = compose_panels(static_panels(), &groups, &plugins);

        // 3 grouped + 2 ungrouped + 2 plugin
        assert_eq!(layout.panels.len(), 7);
        let names: BTreeSet<_> = layout.panels.iter().map(|p| p.name.clone()).collect();
        assert_eq!(names.len(), 7);
        assert!(layout.panel("sample-stock").is_some());
        assert!(layout.panel("graphs").is_some());
        assert_eq!(layout.panel("stock").unwrap().plugin_name(), None);

        let ids: Vec<_> = layout.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["main", "orders", UNGROUPED_ID, PLUGINS_ID]);
        assert_eq!(layout.groups[2].panels, vec!["notes", "attachments"]);
        assert_eq!(layout.groups[3].panels, vec!["sample-stock", "graphs"]);
    }

    #[test]
    fn renamed_collision_gets_suffix() {
        let existing = vec![
            PanelDescriptor::new("stock", "Stock"),
            PanelDescriptor::new("sample-stock", "Sample stock"),
        ];
        let merged = merge_plugin_panels(&existing, vec![plugin("sample", "stock").to_descriptor()]);
        assert_eq!(merged[0].name, "sample-stock-2");
    }

    #[test]
    fn plugin_panels_do_not_clash_with_each_other() {
        let merged = merge_plugin_panels(
            &[],
            vec![
                plugin("a", "chart").to_descriptor(),
                plugin("b", "chart").to_descriptor(),
            ],
        );
        assert_eq!(merged[0].name, "chart");
        assert_eq!(merged[1].name, "b-chart");
    }

    #[test]
    fn no_groups_means_single_ungrouped_bucket() {
        let layout = compose_panels(static_panels(), &[], &[]);
        assert_eq!(layout.groups.len(), 1);
        assert_eq!(layout.groups[0].id, UNGROUPED_ID);
        assert_eq!(layout.groups[0].panels.len(), 5);
    }

    #[test]
    fn hidden_panels_stay_but_are_not_active() {
        let mut panels = static_panels();
        panels[0] = PanelDescriptor::new("details", "Details").hidden_if(true);
        panels[1] = PanelDescriptor::new("stock", "Stock").disabled_if(true);
        let layout = compose_panels(panels, &[], &[]);

        assert_eq!(layout.panels.len(), 5);
        assert_eq!(layout.active_panels().len(), 3);
        assert_eq!(select_panel(&layout, None, None), Some("allocations".to_string()));
        assert_eq!(
            select_panel(&layout, Some("details"), Some("stock")),
            Some("allocations".to_string())
        );
    }

    #[test]
    fn selection_precedence() {
        let layout = compose_panels(static_panels(), &[], &[]);
        assert_eq!(
            select_panel(&layout, Some("notes"), Some("stock")),
            Some("notes".to_string())
        );
        assert_eq!(
            select_panel(&layout, Some("bogus"), Some("stock")),
            Some("stock".to_string())
        );
        assert_eq!(
            select_panel(&layout, None, Some("bogus")),
            Some("details".to_string())
        );
        assert_eq!(select_panel(&PanelLayout::default(), None, None), None);
    }

    #[test]
    fn panel_segment_from_path() {
        assert_eq!(panel_from_path("/part/12/stock", "/part/12"), Some("stock".to_string()));
        assert_eq!(panel_from_path("/part/12/stock/", "/part/12/"), Some("stock".to_string()));
        assert_eq!(panel_from_path("/part/12", "/part/12"), None);
        assert_eq!(panel_from_path("/part/123/stock", "/part/12"), None);
        assert_eq!(panel_from_path("/stock/1", "/part/12"), None);
    }
}
