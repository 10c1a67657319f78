//! Filter values selected by the user for one table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::choices::Choice;

use super::types::FilterSet;

/// Remote choice lists fetched so far, keyed by filter name
pub type LoadedChoices = BTreeMap<String, Vec<Choice>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilters {
    values: BTreeMap<String, String>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with every filter that declares a default value
    pub fn with_defaults(filters: &FilterSet) -> Self {
        let values = filters
            .values()
            .filter_map(|f| f.default_value.clone().map(|v| (f.name.clone(), v)))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Query parameters for the list request. Values for filters the table does
    /// not define are dropped.
    pub fn to_query_pairs(&self, filters: &FilterSet) -> Vec<(String, String)> {
        self.values
            .iter()
            .filter(|(name, value)| filters.contains_key(*name) && !value.is_empty())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// `(name, "Label: Value")` pairs for filter tags.
    ///
    /// Values of server-side choice lists are shown by their label once the
    /// list is in `loaded`; until then the raw value is shown.
    pub fn tags(&self, filters: &FilterSet, loaded: &LoadedChoices) -> Vec<(String, String)> {
        self.values
            .iter()
            .filter_map(|(name, value)| {
                let filter = filters.get(name)?;
                let shown = loaded
                    .get(name)
                    .and_then(|choices| choices.iter().find(|c| c.value == *value))
                    .map(|c| c.label.clone())
                    .unwrap_or_else(|| filter.display_value(value));
                Some((name.clone(), format!("{}: {}", filter.label, shown)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::choices::RemoteChoices;
    use crate::shared::table_filters::types::{filter_set, TableFilter};

    fn filters() -> FilterSet {
        filter_set(vec![
            TableFilter::boolean("in_stock", "In Stock").default_value("true"),
            TableFilter::choice("status", "Status", vec![Choice::new("10", "OK")]),
            TableFilter::text("batch", "Batch"),
        ])
    }

    #[test]
    fn defaults_are_applied() {
        let active = ActiveFilters::with_defaults(&filters());
        assert_eq!(active.get("in_stock"), Some("true"));
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn query_pairs_skip_unknown_and_empty() {
        let mut active = ActiveFilters::new();
        active.set("status", "10");
        active.set("batch", "");
        active.set("bogus", "1");

        assert_eq!(
            active.to_query_pairs(&filters()),
            vec![("status".to_string(), "10".to_string())]
        );
    }

    #[test]
    fn tags_use_labels() {
        let mut active = ActiveFilters::with_defaults(&filters());
        active.set("status", "10");
        let tags = active.tags(&filters(), &LoadedChoices::new());
        assert_eq!(
            tags,
            vec![
                ("in_stock".to_string(), "In Stock: Yes".to_string()),
                ("status".to_string(), "Status: OK".to_string()),
            ]
        );
    }

    #[test]
    fn remote_choice_tags_show_loaded_labels() {
        let filters = filter_set(vec![TableFilter::remote(
            "project_code",
            "Project Code",
            RemoteChoices::project_codes(),
        )]);
        let mut active = ActiveFilters::new();
        active.set("project_code", "4");

        // list not fetched yet
        assert_eq!(
            active.tags(&filters, &LoadedChoices::new()),
            vec![("project_code".to_string(), "Project Code: 4".to_string())]
        );

        let mut loaded = LoadedChoices::new();
        loaded.insert(
            "project_code".to_string(),
            vec![Choice::new("3", "PRJ-3"), Choice::new("4", "PRJ-4")],
        );
        assert_eq!(
            active.tags(&filters, &loaded),
            vec![("project_code".to_string(), "Project Code: PRJ-4".to_string())]
        );
    }
}
