use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::settings::FeatureFlags;

use super::types::{PanelDescriptor, PanelSource};

/// Panel entry of `GET /api/plugins/ui/features/panel/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginPanel {
    pub plugin_name: String,
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub context: Option<Value>,
}

impl PluginPanel {
    pub fn to_descriptor(&self) -> PanelDescriptor {
        let mut panel = PanelDescriptor::new(&self.key, &self.title);
        panel.icon = self.icon.clone();
        panel.source = PanelSource::Plugin {
            plugin_name: self.plugin_name.clone(),
            source: self.source.clone(),
        };
        panel
    }
}

/// Parameters of the plugin panel request for one model instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginPanelQuery {
    pub target_model: String,
    pub target_id: String,
}

impl PluginPanelQuery {
    pub const ENDPOINT: &'static str = "/api/plugins/ui/features/panel/";

    /// Only query when the plugin interface is enabled and the instance is known
    pub fn for_instance(
        flags: &FeatureFlags,
        model: Option<&str>,
        id: Option<&str>,
    ) -> Option<Self> {
        if !flags.plugin_panels {
            return None;
        }
        let model = model.filter(|m| !m.is_empty())?;
        let id = id.filter(|i| !i.is_empty())?;
        Some(Self {
            target_model: model.to_string(),
            target_id: id.to_string(),
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("target_model", self.target_model.clone()),
            ("target_id", self.target_id.clone()),
        ]
    }
}

/// Parse the panel feature list; malformed entries are skipped
pub fn parse_plugin_panels(body: &Value) -> Vec<PluginPanel> {
    crate::shared::choices::list_records(body)
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<PluginPanel>(entry) {
            Ok(panel) => Some(panel),
            Err(e) => {
                log::warn!("Skipping malformed plugin panel: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_requires_flag_model_and_id() {
        let on = FeatureFlags {
            plugin_panels: true,
            ..FeatureFlags::default()
        };
        assert!(PluginPanelQuery::for_instance(&on, Some("part"), Some("12")).is_some());
        assert!(PluginPanelQuery::for_instance(&on, Some("part"), None).is_none());
        assert!(PluginPanelQuery::for_instance(&on, None, Some("12")).is_none());
        assert!(PluginPanelQuery::for_instance(&on, Some(""), Some("12")).is_none());
        assert!(
            PluginPanelQuery::for_instance(&FeatureFlags::default(), Some("part"), Some("12"))
                .is_none()
        );
    }

    #[test]
    fn parses_panels_and_skips_garbage() {
        let body = json!([
            {"plugin_name": "sample", "key": "stock", "title": "Sample Stock", "icon": "ti:box"},
            {"title": "no plugin"}
        ]);
        let panels = parse_plugin_panels(&body);
        assert_eq!(panels.len(), 1);

        let descriptor = panels[0].to_descriptor();
        assert_eq!(descriptor.name, "stock");
        assert_eq!(descriptor.plugin_name(), Some("sample"));
    }
}
