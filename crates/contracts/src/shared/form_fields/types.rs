use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::shared::choices::{scalar_to_string, Choice};

/// Input widget category of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    String,
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Choice,
    Related,
    Url,
    Email,
}

impl FieldKind {
    /// Map the `type` of an OPTIONS schema entry
    pub fn from_api_type(api_type: &str) -> Self {
        match api_type {
            "integer" => Self::Integer,
            "float" | "decimal" => Self::Decimal,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "choice" | "multiple choice" => Self::Choice,
            "related field" | "owner" | "user" => Self::Related,
            "url" => Self::Url,
            "email" => Self::Email,
            _ => Self::String,
        }
    }
}

/// Create a new record or edit an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }
}

/// Metadata describing one form input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub help_text: Option<String>,
    pub required: bool,
    pub hidden: bool,
    pub disabled: bool,
    pub icon: Option<String>,
    pub placeholder: Option<String>,
    pub value: Option<Value>,
    pub choices: Option<Vec<Choice>>,
    /// Lookup endpoint of a related field
    pub api_url: Option<String>,
    pub model: Option<String>,
    /// Query parameters applied to the related-field lookup
    pub filters: BTreeMap<String, String>,
}

impl FieldDescriptor {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: default_label(name),
            kind,
            help_text: None,
            required: false,
            hidden: false,
            disabled: false,
            icon: None,
            placeholder: None,
            value: None,
            choices: None,
            api_url: None,
            model: None,
            filters: BTreeMap::new(),
        }
    }

    pub fn related(name: &str, api_url: &str, model: &str) -> Self {
        let mut field = Self::new(name, FieldKind::Related);
        field.api_url = Some(api_url.to_string());
        field.model = Some(model.to_string());
        field
    }

    pub fn choice(name: &str, choices: Vec<Choice>) -> Self {
        let mut field = Self::new(name, FieldKind::Choice);
        field.choices = Some(choices);
        field
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn help(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn required_if(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
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

    /// Value rendered as a query parameter string
    pub fn value_string(&self) -> Option<String> {
        self.value.as_ref().and_then(scalar_to_string)
    }
}

/// "supplier_part" -> "Supplier Part"
fn default_label(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered set of fields; a field's identity is its name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSet {
    fields: Vec<FieldDescriptor>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        let mut set = Self::new();
        for field in fields {
            set.insert(field);
        }
        set
    }

    /// Add a field, replacing an existing field of the same name in place
    pub fn insert(&mut self, field: FieldDescriptor) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldDescriptor> {
        let index = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy values from a record for every field the set contains.
    /// Nulls in the record are ignored.
    pub fn seed(&mut self, record: &Value) {
        let Some(map) = record.as_object() else {
            return;
        };
        for field in self.fields.iter_mut() {
            if let Some(value) = map.get(&field.name) {
                if !value.is_null() {
                    field.value = Some(value.clone());
                }
            }
        }
    }

    /// Request body for submission: every field with a value, disabled ones excluded
    pub fn submission(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter(|f| !f.disabled)
            .filter_map(|f| f.value.clone().map(|v| (f.name.clone(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_from_names() {
        assert_eq!(default_label("supplier_part"), "Supplier Part");
        assert_eq!(default_label("IPN"), "IPN");
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut set = FieldSet::from_fields(vec![
            FieldDescriptor::new("a", FieldKind::String),
            FieldDescriptor::new("b", FieldKind::String),
        ]);
        set.insert(FieldDescriptor::new("a", FieldKind::Integer));
        assert_eq!(set.names(), vec!["a", "b"]);
        assert_eq!(set.get("a").unwrap().kind, FieldKind::Integer);
    }

    #[test]
    fn seed_and_submission() {
        let mut set = FieldSet::from_fields(vec![
            FieldDescriptor::new("batch", FieldKind::String),
            FieldDescriptor::new("part", FieldKind::Related).disabled(),
            FieldDescriptor::new("link", FieldKind::Url),
        ]);
        set.seed(&json!({"pk": 9, "batch": "B-1", "part": 3, "link": null}));

        assert_eq!(set.get("batch").unwrap().value, Some(json!("B-1")));
        assert_eq!(set.get("link").unwrap().value, None);

        let body = set.submission();
        assert_eq!(body.len(), 1);
        assert_eq!(body["batch"], json!("B-1"));
    }

    #[test]
    fn api_types() {
        assert_eq!(FieldKind::from_api_type("related field"), FieldKind::Related);
        assert_eq!(FieldKind::from_api_type("decimal"), FieldKind::Decimal);
        assert_eq!(FieldKind::from_api_type("whatever"), FieldKind::String);
    }
}
