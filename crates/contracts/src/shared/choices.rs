//! Choice lists for filters and form fields.
//!
//! Static choices are plain `Vec<Choice>`. Remote choices are described by a
//! [`RemoteChoices`] source; the UI fetches the list when the widget opens and
//! keeps it in a [`ChoiceCache`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

/// A single selectable option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declarative description of a choice list that lives on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteChoices {
    /// List endpoint, relative to the API base (e.g. `/api/user/`)
    pub endpoint: String,
    /// Query parameters sent with the list request
    #[serde(default)]
    pub params: Vec<(String, String)>,
    /// Record field used as the choice value
    pub value_field: String,
    /// Record fields joined with a space to build the label
    pub label_fields: Vec<String>,
}

impl RemoteChoices {
    pub fn new(endpoint: impl Into<String>, label_fields: &[&str]) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: Vec::new(),
            value_field: "pk".to_string(),
            label_fields: label_fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Users which can be selected as "issued by" / "created by"
    pub fn users() -> Self {
        Self::new("/api/user/", &["username"]).param("is_active", "true")
    }

    /// Owners (users and groups) for "responsible" filters
    pub fn owners() -> Self {
        Self::new("/api/user/owner/", &["name"])
    }

    pub fn project_codes() -> Self {
        Self::new("/api/project-code/", &["code"])
    }

    pub fn location_types() -> Self {
        Self::new("/api/stock/location-type/", &["name"])
    }

    /// Convert fetched records into choices; records without a value are skipped
    pub fn to_choices(&self, records: &[Value]) -> Vec<Choice> {
        records
            .iter()
            .filter_map(|record| {
                let value = scalar_to_string(record.get(&self.value_field)?)?;
                let label = self
                    .label_fields
                    .iter()
                    .filter_map(|f| record.get(f).and_then(scalar_to_string))
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                let label = if label.is_empty() { value.clone() } else { label };
                Some(Choice { value, label })
            })
            .collect()
    }
}

/// Render a JSON scalar as a string. Objects, arrays and nulls have no scalar form.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extract records from a list response.
///
/// Accepts both a bare JSON array and a paginated `{"results": [...]}` page.
/// Anything else yields no records.
pub fn list_records(body: &Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items.clone(),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Total record count of a list response (falls back to the number of records)
pub fn list_count(body: &Value) -> usize {
    body.get("count")
        .and_then(Value::as_u64)
        .map(|c| c as usize)
        .unwrap_or_else(|| list_records(body).len())
}

/// Loading state of a remote choice list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChoiceState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<Choice>),
}

/// Fetch-once cache for a remote choice list.
///
/// The first successful load is kept for the lifetime of the cache. A failed
/// load yields no options and leaves the cache empty so the next open tries again.
#[derive(Debug, Clone, Default)]
pub struct ChoiceCache {
    choices: Option<Vec<Choice>>,
}

impl ChoiceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self) -> Option<&[Choice]> {
        self.choices.as_deref()
    }

    pub fn store(&mut self, choices: Vec<Choice>) {
        self.choices = Some(choices);
    }

    /// Return the cached list or load it with `fetch`.
    ///
    /// `fetch` receives the source and returns the raw list response body.
    pub async fn get_or_load<F, Fut>(&mut self, source: &RemoteChoices, fetch: F) -> Vec<Choice>
    where
        F: FnOnce(RemoteChoices) -> Fut,
        Fut: Future<Output = Result<Value, String>>,
    {
        if let Some(choices) = &self.choices {
            return choices.clone();
        }

        match fetch(source.clone()).await {
            Ok(body) => {
                let choices = source.to_choices(&list_records(&body));
                self.choices = Some(choices.clone());
                choices
            }
            Err(e) => {
                log::error!("Failed to load choices from {}: {}", source.endpoint, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn list_records_accepts_array_and_page() {
        let raw = json!([{"pk": 1}, {"pk": 2}]);
        let page = json!({"count": 10, "results": [{"pk": 3}]});

        assert_eq!(list_records(&raw).len(), 2);
        assert_eq!(list_records(&page).len(), 1);
        assert_eq!(list_count(&page), 10);
        assert_eq!(list_count(&raw), 2);
        assert!(list_records(&json!({"detail": "nope"})).is_empty());
    }

    #[test]
    fn records_without_value_are_skipped() {
        let source = RemoteChoices::project_codes();
        let records = vec![
            json!({"pk": 4, "code": "PRJ-1"}),
            json!({"code": "orphan"}),
            json!({"pk": "7"}),
        ];

        let choices = source.to_choices(&records);
        assert_eq!(
            choices,
            vec![Choice::new("4", "PRJ-1"), Choice::new("7", "7")]
        );
    }

    #[test]
    fn label_joins_fields() {
        let source = RemoteChoices::new("/api/user/", &["first_name", "last_name"]);
        let choices = source.to_choices(&[json!({"pk": 1, "first_name": "Ada", "last_name": "Lovelace"})]);
        assert_eq!(choices[0].label, "Ada Lovelace");
    }

    #[tokio::test]
    async fn cache_fetches_once() {
        let calls = Cell::new(0);
        let mut cache = ChoiceCache::new();
        let source = RemoteChoices::users();

        for _ in 0..3 {
            let choices = cache
                .get_or_load(&source, |_| {
                    calls.set(calls.get() + 1);
                    async { Ok(json!({"results": [{"pk": 1, "username": "admin"}]})) }
                })
                .await;
            assert_eq!(choices, vec![Choice::new("1", "admin")]);
        }

        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_yields_nothing_and_is_not_cached() {
        let mut cache = ChoiceCache::new();
        let source = RemoteChoices::owners();

        let choices = cache
            .get_or_load(&source, |_| async { Err("HTTP 500".to_string()) })
            .await;
        assert!(choices.is_empty());
        assert!(cache.cached().is_none());

        let choices = cache
            .get_or_load(&source, |_| async { Ok(json!([{"pk": 2, "name": "Team"}])) })
            .await;
        assert_eq!(choices.len(), 1);
    }
}
