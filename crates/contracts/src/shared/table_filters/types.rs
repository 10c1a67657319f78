use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::choices::{Choice, RemoteChoices};

/// Widget used to edit a filter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Boolean,
    Choice,
    Date,
    Text,
    Api,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Choice => "choice",
            Self::Date => "date",
            Self::Text => "text",
            Self::Api => "api",
        }
    }
}

/// Declarative description of one table filter.
///
/// Built fresh on every registry lookup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFilter {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    /// Explicit widget type; when absent the type is inferred
    pub filter_type: Option<FilterType>,
    pub choices: Option<Vec<Choice>>,
    /// Choice list fetched lazily when the filter is opened
    pub choice_source: Option<RemoteChoices>,
    pub default_value: Option<String>,
    pub api_url: Option<String>,
    pub model: Option<String>,
}

impl TableFilter {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            filter_type: None,
            choices: None,
            choice_source: None,
            default_value: None,
            api_url: None,
            model: None,
        }
    }

    pub fn boolean(name: &str, label: &str) -> Self {
        Self::new(name, label)
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label).with_type(FilterType::Text)
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label).with_type(FilterType::Date)
    }

    pub fn choice(name: &str, label: &str, choices: Vec<Choice>) -> Self {
        let mut filter = Self::new(name, label);
        filter.choices = Some(choices);
        filter
    }

    pub fn remote(name: &str, label: &str, source: RemoteChoices) -> Self {
        let mut filter = Self::new(name, label);
        filter.choice_source = Some(source);
        filter
    }

    pub fn api(name: &str, label: &str, api_url: &str, model: &str) -> Self {
        let mut filter = Self::new(name, label);
        filter.api_url = Some(api_url.to_string());
        filter.model = Some(model.to_string());
        filter
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn with_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = Some(filter_type);
        self
    }

    /// Effective widget type: explicit type > api > choice > boolean
    pub fn inferred_type(&self) -> FilterType {
        if let Some(t) = self.filter_type {
            return t;
        }
        if self.api_url.is_some() && self.model.is_some() {
            return FilterType::Api;
        }
        if self.choices.is_some() || self.choice_source.is_some() {
            return FilterType::Choice;
        }
        FilterType::Boolean
    }

    /// True when the choice list must be fetched before the widget can render it
    pub fn has_lazy_choices(&self) -> bool {
        self.choices.is_none() && self.choice_source.is_some()
    }

    /// Where the widget loads its options from: the declared source, or the
    /// model endpoint of an api filter
    pub fn lookup_source(&self) -> Option<RemoteChoices> {
        if let Some(source) = &self.choice_source {
            return Some(source.clone());
        }
        match (self.inferred_type(), &self.api_url) {
            (FilterType::Api, Some(url)) => Some(RemoteChoices::new(url.clone(), &["name"])),
            _ => None,
        }
    }

    /// Human readable form of a selected value
    pub fn display_value(&self, value: &str) -> String {
        match self.inferred_type() {
            FilterType::Boolean => match value {
                "true" => "Yes".to_string(),
                "false" => "No".to_string(),
                other => other.to_string(),
            },
            _ => self
                .choices
                .as_ref()
                .and_then(|choices| choices.iter().find(|c| c.value == value))
                .map(|c| c.label.clone())
                .unwrap_or_else(|| value.to_string()),
        }
    }
}

/// Filters of one table, keyed by filter name
pub type FilterSet = BTreeMap<String, TableFilter>;

/// Collect filters into a [`FilterSet`]. A repeated name keeps the first definition.
pub fn filter_set(filters: impl IntoIterator<Item = TableFilter>) -> FilterSet {
    let mut set = FilterSet::new();
    for filter in filters {
        if set.contains_key(&filter.name) {
            log::warn!("Duplicate table filter '{}' ignored", filter.name);
            continue;
        }
        set.insert(filter.name.clone(), filter);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_precedence() {
        let explicit = TableFilter::api("owner", "Owner", "/api/user/owner/", "owner")
            .with_type(FilterType::Text);
        assert_eq!(explicit.inferred_type(), FilterType::Text);

        let mut api = TableFilter::api("part", "Part", "/api/part/", "part");
        api.choices = Some(vec![Choice::new("1", "one")]);
        assert_eq!(api.inferred_type(), FilterType::Api);

        let remote = TableFilter::remote("issued_by", "Issued By", RemoteChoices::users());
        assert_eq!(remote.inferred_type(), FilterType::Choice);
        assert!(remote.has_lazy_choices());

        assert_eq!(
            TableFilter::boolean("active", "Active").inferred_type(),
            FilterType::Boolean
        );
    }

    #[test]
    fn api_needs_both_url_and_model() {
        let mut filter = TableFilter::new("location", "Location");
        filter.api_url = Some("/api/stock/location/".to_string());
        assert_eq!(filter.inferred_type(), FilterType::Boolean);
    }

    #[test]
    fn lookup_source_for_remote_and_api_filters() {
        let remote = TableFilter::remote("issued_by", "Issued By", RemoteChoices::users());
        assert_eq!(remote.lookup_source(), Some(RemoteChoices::users()));

        let api = TableFilter::api("supplier", "Supplier", "/api/company/", "company");
        assert_eq!(api.lookup_source().unwrap().endpoint, "/api/company/");

        assert!(TableFilter::boolean("active", "Active").lookup_source().is_none());
    }

    #[test]
    fn duplicates_keep_first() {
        let set = filter_set(vec![
            TableFilter::boolean("active", "Active"),
            TableFilter::boolean("active", "Something else"),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set["active"].label, "Active");
    }

    #[test]
    fn display_values() {
        let filter = TableFilter::choice("status", "Status", vec![Choice::new("10", "OK")]);
        assert_eq!(filter.display_value("10"), "OK");
        assert_eq!(filter.display_value("99"), "99");
        assert_eq!(TableFilter::boolean("a", "A").display_value("true"), "Yes");
    }
}
