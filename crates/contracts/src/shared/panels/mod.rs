//! Panel (tab) composition for detail pages
//!
//! A page declares its static panels and optional groups; plugins may add
//! more panels for a model instance. [`compose_panels`] merges both into a
//! [`PanelLayout`] where every panel name is unique.

mod compose;
mod plugin;
mod types;

pub use compose::{
    compose_panels, merge_plugin_panels, panel_from_path, select_panel, PLUGINS_ID, UNGROUPED_ID,
};
pub use plugin::{parse_plugin_panels, PluginPanel, PluginPanelQuery};
pub use types::{PanelDescriptor, PanelGroupSpec, PanelGroupView, PanelLayout, PanelSource};
