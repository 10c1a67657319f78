use serde_json::Value;
use std::collections::BTreeMap;

/// Values an entity builder starts from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormContext {
    /// Existing record in edit mode, duplicate source in create mode
    pub source: Option<Value>,
    /// Values chosen by the calling page (e.g. the part shown on a part detail page).
    /// Applied after `source`.
    pub initial: BTreeMap<String, Value>,
}

impl FormContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: Value) -> Self {
        Self {
            source: Some(record),
            initial: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.initial.insert(name.to_string(), value.into());
        self
    }

    /// Current value of a field from `initial`, then `source`
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.initial
            .get(name)
            .or_else(|| self.source.as_ref().and_then(|s| s.get(name)))
            .filter(|v| !v.is_null())
    }
}
