//! Label and report printing forms.
//!
//! The print endpoints describe their own fields through OPTIONS; this module
//! only adds the static overrides that tie the form to the selected items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::form_fields::{merge_schema, FieldKind, FieldOverride, FieldSet, OptionsSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintKind {
    Label,
    Report,
}

impl PrintKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Label => "/api/label/print/",
            Self::Report => "/api/report/print/",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Label => "Print Label",
            Self::Report => "Print Report",
        }
    }
}

/// Template lookup filter value: comma separated item keys
fn items_param(items: &[i64]) -> String {
    items
        .iter()
        .map(|pk| pk.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn print_overrides(kind: PrintKind, model_type: &str, items: &[i64]) -> Vec<FieldOverride> {
    let mut overrides = vec![
        FieldOverride::new("template")
            .required(true)
            .filter("enabled", "true")
            .filter("model_type", model_type)
            .filter("items", &items_param(items)),
        FieldOverride::new("items")
            .hidden(true)
            .value(Value::Array(items.iter().map(|pk| Value::from(*pk)).collect())),
    ];

    if kind == PrintKind::Label {
        overrides.push(
            FieldOverride::new("plugin")
                .kind(FieldKind::Related)
                .filter("active", "true")
                .filter("mixin", "labels"),
        );
    }

    overrides
}

/// Print form for `items` of `model_type`, from the endpoint's OPTIONS response
pub fn print_form(
    schema: &OptionsSchema,
    kind: PrintKind,
    model_type: &str,
    items: &[i64],
) -> FieldSet {
    merge_schema(schema, &print_overrides(kind, model_type, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> OptionsSchema {
        OptionsSchema::from_response(&json!({
            "actions": {
                "POST": {
                    "template": {"type": "related field", "label": "Template", "model": "labeltemplate", "api_url": "/api/label/template/"},
                    "plugin": {"type": "related field", "label": "Plugin", "model": "pluginconfig", "api_url": "/api/plugins/"},
                    "items": {"type": "list", "label": "Items", "required": true}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn label_form_ties_template_to_items() {
        let form = print_form(&schema(), PrintKind::Label, "stockitem", &[3, 4]);

        let template = form.get("template").unwrap();
        assert!(template.required);
        assert_eq!(template.filters["model_type"], "stockitem");
        assert_eq!(template.filters["items"], "3,4");

        let items = form.get("items").unwrap();
        assert!(items.hidden);
        assert_eq!(items.value, Some(json!([3, 4])));

        assert_eq!(form.get("plugin").unwrap().filters["mixin"], "labels");
        assert_eq!(form.names(), vec!["template", "plugin", "items"]);
    }

    #[test]
    fn report_form_has_no_plugin_override() {
        let form = print_form(&schema(), PrintKind::Report, "part", &[1]);
        assert!(form.get("plugin").unwrap().filters.is_empty());
        assert_eq!(PrintKind::Report.endpoint(), "/api/report/print/");
    }
}
