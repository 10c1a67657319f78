use serde_json::Value;
use std::collections::BTreeMap;

use crate::shared::choices::scalar_to_string;

/// Errors of a rejected submission, as returned with a 400 response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors not tied to a field (`non_field_errors`, `detail`)
    pub general: Vec<String>,
    /// First message per field
    pub fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Read the error body. Field names not in `known_fields` are reported as
    /// general errors so they are never lost.
    pub fn from_response(body: &Value, known_fields: &[&str]) -> Self {
        let mut errors = Self::default();
        let Some(map) = body.as_object() else {
            if let Some(text) = scalar_to_string(body) {
                errors.general.push(text);
            }
            return errors;
        };

        for (key, value) in map {
            let messages = messages(value);
            if messages.is_empty() {
                continue;
            }
            match key.as_str() {
                "non_field_errors" | "detail" => errors.general.extend(messages),
                name if known_fields.contains(&name) => {
                    errors.fields.insert(name.to_string(), messages.join(" "));
                }
                name => errors
                    .general
                    .extend(messages.into_iter().map(|m| format!("{name}: {m}"))),
            }
        }
        errors
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            general: vec![message.into()],
            fields: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.general.is_empty() && self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

fn messages(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().flat_map(messages).collect(),
        // nested serializer errors are flattened
        Value::Object(map) => map.values().flat_map(messages).collect(),
        other => scalar_to_string(other).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_field_and_general_errors() {
        let body = json!({
            "quantity": ["Quantity must be greater than zero"],
            "serial_numbers": ["Serial numbers already exist", "12"],
            "non_field_errors": ["Part is not active"],
            "owner": ["Invalid owner"]
        });
        let errors = ValidationErrors::from_response(&body, &["quantity", "serial_numbers"]);

        assert_eq!(errors.field("quantity"), Some("Quantity must be greater than zero"));
        assert_eq!(errors.field("serial_numbers"), Some("Serial numbers already exist 12"));
        assert_eq!(
            errors.general,
            vec!["Part is not active".to_string(), "owner: Invalid owner".to_string()]
        );
    }

    #[test]
    fn plain_detail_message() {
        let errors = ValidationErrors::from_response(&json!({"detail": "Not found."}), &[]);
        assert_eq!(errors.general, vec!["Not found."]);
        assert!(errors.fields.is_empty());
        assert!(ValidationErrors::from_response(&json!({}), &[]).is_empty());
    }
}
