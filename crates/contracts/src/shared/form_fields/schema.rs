//! OPTIONS introspection and merging with static field overrides.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::shared::choices::{scalar_to_string, Choice};

use super::error::FormError;
use super::types::{FieldDescriptor, FieldKind, FieldSet};

#[derive(Debug, Clone, Deserialize)]
struct SchemaChoice {
    value: Value,
    display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaField {
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    choices: Option<Vec<SchemaChoice>>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl SchemaField {
    fn to_descriptor(&self, name: &str) -> FieldDescriptor {
        let mut field = FieldDescriptor::new(name, FieldKind::from_api_type(&self.field_type));
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        field.help_text = self.help_text.clone();
        field.required = self.required;
        field.disabled = self.read_only;
        field.placeholder = self.placeholder.clone();
        field.api_url = self.api_url.clone();
        field.model = self.model.clone();
        field.value = self.default.clone().filter(|v| !v.is_null());
        field.choices = self.choices.as_ref().map(|choices| {
            choices
                .iter()
                .filter_map(|c| Some(Choice::new(scalar_to_string(&c.value)?, &c.display_name)))
                .collect()
        });
        field
    }
}

/// Field declarations of an OPTIONS response (`actions.POST`, else `actions.PUT`)
#[derive(Debug, Clone)]
pub struct OptionsSchema {
    fields: Vec<(String, SchemaField)>,
}

impl OptionsSchema {
    pub fn from_response(body: &Value) -> Result<Self, FormError> {
        let actions = body
            .get("actions")
            .and_then(Value::as_object)
            .ok_or_else(|| FormError::InvalidSchema("missing 'actions'".to_string()))?;
        let declared: &Map<String, Value> = actions
            .get("POST")
            .or_else(|| actions.get("PUT"))
            .and_then(Value::as_object)
            .ok_or_else(|| FormError::InvalidSchema("no POST or PUT action".to_string()))?;

        let mut fields = Vec::with_capacity(declared.len());
        for (name, raw) in declared {
            let field: SchemaField = serde_json::from_value(raw.clone())
                .map_err(|e| FormError::InvalidSchema(format!("{name}: {e}")))?;
            fields.push((name.clone(), field));
        }
        Ok(Self { fields })
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, f)| f)
    }

    pub fn to_field_set(&self) -> FieldSet {
        FieldSet::from_fields(self.fields.iter().map(|(name, f)| f.to_descriptor(name)))
    }
}

/// Partial, statically declared field attributes.
///
/// Every attribute that is set wins over the introspected value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOverride {
    pub name: String,
    pub kind: Option<FieldKind>,
    pub label: Option<String>,
    pub required: Option<bool>,
    pub hidden: Option<bool>,
    pub disabled: Option<bool>,
    pub icon: Option<String>,
    pub value: Option<Value>,
    pub filters: BTreeMap<String, String>,
}

impl FieldOverride {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn filter(mut self, key: &str, value: &str) -> Self {
        self.filters.insert(key.to_string(), value.to_string());
        self
    }

    fn apply(&self, field: &mut FieldDescriptor) {
        if let Some(kind) = self.kind {
            field.kind = kind;
        }
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(hidden) = self.hidden {
            field.hidden = hidden;
        }
        if let Some(disabled) = self.disabled {
            field.disabled = disabled;
        }
        if let Some(icon) = &self.icon {
            field.icon = Some(icon.clone());
        }
        if let Some(value) = &self.value {
            field.value = Some(value.clone());
        }
        for (k, v) in &self.filters {
            field.filters.insert(k.clone(), v.clone());
        }
    }
}

/// Merge introspected fields with static overrides.
///
/// Introspected fields keep their order; override-only fields are appended.
pub fn merge_schema(schema: &OptionsSchema, overrides: &[FieldOverride]) -> FieldSet {
    let mut fields = schema.to_field_set();
    for o in overrides {
        match fields.get_mut(&o.name) {
            Some(field) => o.apply(field),
            None => {
                let mut field = FieldDescriptor::new(&o.name, o.kind.unwrap_or_default());
                o.apply(&mut field);
                fields.insert(field);
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options_body() -> Value {
        json!({
            "name": "Label Print",
            "actions": {
                "POST": {
                    "template": {
                        "type": "related field",
                        "label": "Template",
                        "required": true,
                        "model": "labeltemplate",
                        "api_url": "/api/label/template/"
                    },
                    "copies": {"type": "integer", "label": "Copies", "default": 1},
                    "paper": {
                        "type": "choice",
                        "label": "Paper",
                        "required": false,
                        "choices": [
                            {"value": "A4", "display_name": "A4"},
                            {"value": "letter", "display_name": "Letter"}
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn parses_post_action() {
        let schema = OptionsSchema::from_response(&options_body()).unwrap();
        let fields = schema.to_field_set();
        assert_eq!(fields.len(), 3);

        let template = fields.get("template").unwrap();
        assert_eq!(template.kind, FieldKind::Related);
        assert!(template.required);
        assert_eq!(template.api_url.as_deref(), Some("/api/label/template/"));

        let paper = fields.get("paper").unwrap();
        assert_eq!(paper.choices.as_ref().unwrap().len(), 2);
        assert_eq!(fields.get("copies").unwrap().value, Some(json!(1)));
    }

    #[test]
    fn falls_back_to_put() {
        let body = json!({"actions": {"PUT": {"name": {"type": "string"}}}});
        let schema = OptionsSchema::from_response(&body).unwrap();
        assert!(schema.field("name").is_some());
    }

    #[test]
    fn missing_actions_is_invalid() {
        assert!(matches!(
            OptionsSchema::from_response(&json!({"detail": "denied"})),
            Err(FormError::InvalidSchema(_))
        ));
    }

    #[test]
    fn overrides_win() {
        let schema = OptionsSchema::from_response(&options_body()).unwrap();
        let merged = merge_schema(
            &schema,
            &[
                FieldOverride::new("template")
                    .required(false)
                    .filter("enabled", "true"),
                FieldOverride::new("items").hidden(true).value(json!([1, 2])),
            ],
        );

        let template = merged.get("template").unwrap();
        assert!(!template.required);
        assert_eq!(template.label, "Template");
        assert_eq!(template.filters.get("enabled"), Some(&"true".to_string()));

        let items = merged.get("items").unwrap();
        assert!(items.hidden);
        assert_eq!(merged.names().last(), Some(&"items"));
        // untouched introspected fields survive
        assert!(!merged.get("paper").unwrap().required);
    }
}
