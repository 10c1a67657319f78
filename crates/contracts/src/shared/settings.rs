//! Global (system-wide) settings and the feature flags derived from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const STOCK_ENABLE_EXPIRY: &str = "STOCK_ENABLE_EXPIRY";
pub const PROJECT_CODES_ENABLED: &str = "PROJECT_CODES_ENABLED";
pub const STOCK_OWNERSHIP_CONTROL: &str = "STOCK_OWNERSHIP_CONTROL";
pub const ENABLE_PLUGINS_INTERFACE: &str = "ENABLE_PLUGINS_INTERFACE";
pub const BUILDORDER_REQUIRE_RESPONSIBLE: &str = "BUILDORDER_REQUIRE_RESPONSIBLE";

/// Interpret a setting value as a boolean.
///
/// `1`, `y`, `yes`, `t`, `true` and `on` (any case) are true, everything else is false.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "y" | "yes" | "t" | "true" | "on"
    )
}

/// One entry of `GET /api/settings/global/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingEntry {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

/// Snapshot of the global settings lookup (`key -> string value`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalSettings {
    values: HashMap<String, String>,
}

impl GlobalSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<SettingEntry>) -> Self {
        let values = entries
            .into_iter()
            .map(|e| {
                let value = match e.value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (e.key, value)
            })
            .collect();
        Self { values }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key).map(is_truthy).unwrap_or(false)
    }
}

/// Feature flags passed explicitly into every filter, field and panel builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub stock_expiry: bool,
    pub project_codes: bool,
    pub stock_ownership: bool,
    pub plugin_panels: bool,
    pub build_requires_responsible: bool,
}

impl FeatureFlags {
    pub fn from_settings(settings: &GlobalSettings) -> Self {
        Self {
            stock_expiry: settings.is_enabled(STOCK_ENABLE_EXPIRY),
            project_codes: settings.is_enabled(PROJECT_CODES_ENABLED),
            stock_ownership: settings.is_enabled(STOCK_OWNERSHIP_CONTROL),
            plugin_panels: settings.is_enabled(ENABLE_PLUGINS_INTERFACE),
            build_requires_responsible: settings.is_enabled(BUILDORDER_REQUIRE_RESPONSIBLE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthy_strings() {
        for v in ["1", "y", "Yes", "t", "TRUE", "on", " true "] {
            assert!(is_truthy(v), "{v} should be truthy");
        }
        for v in ["0", "false", "off", "", "no", "enabled"] {
            assert!(!is_truthy(v), "{v} should be falsy");
        }
    }

    #[test]
    fn flags_from_settings_entries() {
        let entries: Vec<SettingEntry> = serde_json::from_value(json!([
            {"key": "STOCK_ENABLE_EXPIRY", "value": "True"},
            {"key": "PROJECT_CODES_ENABLED", "value": false},
            {"key": "ENABLE_PLUGINS_INTERFACE", "value": true},
            {"key": "STOCK_OWNERSHIP_CONTROL", "value": null}
        ]))
        .unwrap();

        let flags = FeatureFlags::from_settings(&GlobalSettings::from_entries(entries));
        assert!(flags.stock_expiry);
        assert!(!flags.project_codes);
        assert!(flags.plugin_panels);
        assert!(!flags.stock_ownership);
        assert!(!flags.build_requires_responsible);
    }
}
