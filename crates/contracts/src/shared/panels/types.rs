use serde::{Deserialize, Serialize};

/// Where a panel's content comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelSource {
    /// Rendered by the page itself, looked up by panel name
    Static,
    /// Contributed by an installed plugin
    Plugin {
        plugin_name: String,
        /// Script or HTML the plugin serves for this panel
        source: Option<String>,
    },
}

/// One tab of a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// Unique within the composed layout
    pub name: String,
    pub label: String,
    pub icon: Option<String>,
    pub hidden: bool,
    pub disabled: bool,
    /// The page renders extra controls in the panel header
    pub controls: bool,
    pub notification_dot: bool,
    pub source: PanelSource,
}

impl PanelDescriptor {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            icon: None,
            hidden: false,
            disabled: false,
            controls: false,
            notification_dot: false,
            source: PanelSource::Static,
        }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn hidden_if(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn notification_dot(mut self, show: bool) -> Self {
        self.notification_dot = show;
        self
    }

    /// Can be selected and routed to
    pub fn is_active(&self) -> bool {
        !self.hidden && !self.disabled
    }

    pub fn plugin_name(&self) -> Option<&str> {
        match &self.source {
            PanelSource::Plugin { plugin_name, .. } => Some(plugin_name),
            PanelSource::Static => None,
        }
    }
}

/// Declared tab section: a labelled list of panel names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGroupSpec {
    pub id: String,
    pub label: String,
    pub panel_names: Vec<String>,
}

impl PanelGroupSpec {
    pub fn new(id: &str, label: &str, panel_names: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            panel_names: panel_names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// A group as rendered: label plus the names of its panels in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGroupView {
    pub id: String,
    pub label: String,
    pub panels: Vec<String>,
}

/// Composed panels of a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// All panels, static first then plugin panels
    pub panels: Vec<PanelDescriptor>,
    pub groups: Vec<PanelGroupView>,
}

impl PanelLayout {
    pub fn panel(&self, name: &str) -> Option<&PanelDescriptor> {
        self.panels.iter().find(|p| p.name == name)
    }

    /// Panels that can be selected (neither hidden nor disabled)
    pub fn active_panels(&self) -> Vec<&PanelDescriptor> {
        self.panels.iter().filter(|p| p.is_active()).collect()
    }

    pub fn is_active_panel(&self, name: &str) -> bool {
        self.panel(name).map(|p| p.is_active()).unwrap_or(false)
    }
}
