//! Runtime state of a form: field values plus reaction execution.

use serde_json::Value;
use std::collections::HashSet;

use crate::shared::choices::scalar_to_string;
use crate::shared::requests::{RequestTracker, Ticket};

use super::context::FormContext;
use super::dependencies::{Dependency, DependencyGraph, FollowUpKind, Reaction};
use super::error::FormError;
use super::types::FieldSet;

/// Field set plus its declared dependencies, as produced by an entity builder
#[derive(Debug, Clone, PartialEq)]
pub struct EntityForm {
    pub fields: FieldSet,
    pub dependencies: DependencyGraph,
}

impl EntityForm {
    /// Build a form. Dependencies naming a field that is not in `fields`
    /// (removed for the current mode or feature flags) are dropped.
    pub fn new(fields: FieldSet, dependencies: Vec<Dependency>) -> Result<Self, FormError> {
        let dependencies = dependencies
            .into_iter()
            .filter(|d| fields.contains(&d.source) && fields.contains(&d.target))
            .collect();
        let dependencies = DependencyGraph::new(dependencies)?;
        let mut form = Self {
            fields,
            dependencies,
        };
        form.refresh_filters();
        Ok(form)
    }

    /// Build a form and pre-fill it from `context`
    pub fn build(
        fields: FieldSet,
        dependencies: Vec<Dependency>,
        context: &FormContext,
    ) -> Result<Self, FormError> {
        let mut form = Self::new(fields, dependencies)?;
        if let Some(source) = &context.source {
            form.fields.seed(source);
        }
        for (name, value) in &context.initial {
            if let Some(field) = form.fields.get_mut(name) {
                field.value = Some(value.clone());
            }
        }
        form.refresh_filters();
        Ok(form)
    }

    /// Pre-fill values from an existing record (edit) or a duplicate source (create)
    pub fn seed(mut self, record: &Value) -> Self {
        self.fields.seed(record);
        self.refresh_filters();
        self
    }

    /// Apply every `FilterBy` edge from the current source values
    pub fn refresh_filters(&mut self) {
        let edges: Vec<Dependency> = self.dependencies.dependencies().to_vec();
        for dep in edges {
            if let Reaction::FilterBy { param } = &dep.reaction {
                let value = self.fields.get(&dep.source).and_then(|f| f.value_string());
                if let Some(target) = self.fields.get_mut(&dep.target) {
                    match value {
                        Some(v) => {
                            target.filters.insert(param.clone(), v);
                        }
                        None => {
                            target.filters.remove(param);
                        }
                    }
                }
            }
        }
    }
}

/// Server lookup requested by a `Requery` reaction
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    pub ticket: Ticket,
    pub target: String,
    pub kind: FollowUpKind,
    /// Value of the source field when the lookup was requested
    pub source_value: Value,
}

/// What a value change did to the rest of the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeReport {
    pub cleared: Vec<String>,
    pub filtered: Vec<String>,
    pub follow_ups: Vec<FollowUp>,
}

#[derive(Debug, Clone)]
pub struct FormState {
    form: EntityForm,
    tracker: RequestTracker,
}

impl FormState {
    pub fn new(form: EntityForm) -> Self {
        Self {
            form,
            tracker: RequestTracker::new(),
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.form.fields
    }

    pub fn form(&self) -> &EntityForm {
        &self.form
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.form.fields.get(name).and_then(|f| f.value.as_ref())
    }

    /// Set a field value and run every reaction reachable from it.
    pub fn set_value(&mut self, name: &str, value: Option<Value>) -> Result<ChangeReport, FormError> {
        let field = self
            .form
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        field.value = value;
        Ok(self.propagate(name))
    }

    /// Accept the result of a follow-up lookup.
    ///
    /// Returns `None` when the ticket is stale: the source changed again (or the
    /// form was torn down) after the lookup started, so the result is dropped.
    pub fn apply_follow_up(&mut self, follow_up: &FollowUp, value: Option<Value>) -> Option<ChangeReport> {
        if !self.tracker.complete(&follow_up.ticket) {
            log::debug!(
                "Dropping stale {:?} result for '{}'",
                follow_up.kind,
                follow_up.target
            );
            return None;
        }

        let field = self.form.fields.get_mut(&follow_up.target)?;
        if !follow_up.kind.fills_value() {
            field.placeholder = value
                .as_ref()
                .and_then(scalar_to_string)
                .and_then(|result| follow_up.kind.hint(&result));
            return Some(ChangeReport::default());
        }
        // the target was emptied when the lookup started; no result keeps it empty
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Some(ChangeReport::default());
        };
        field.value = Some(value);
        Some(self.propagate(&follow_up.target))
    }

    /// Invalidate all outstanding follow-ups
    pub fn cancel_pending(&mut self) {
        self.tracker.cancel_all();
    }

    pub fn pending(&self) -> usize {
        self.tracker.in_flight()
    }

    fn propagate(&mut self, start: &str) -> ChangeReport {
        let mut report = ChangeReport::default();
        let mut changed: HashSet<String> = HashSet::new();
        changed.insert(start.to_string());

        let order: Vec<String> = self.form.dependencies.order().to_vec();
        let edges: Vec<Dependency> = self.form.dependencies.dependencies().to_vec();

        for node in order {
            if !changed.contains(&node) {
                continue;
            }
            let source_value = self.form.fields.get(&node).and_then(|f| f.value.clone());

            for dep in edges.iter().filter(|d| d.source == node) {
                let Some(target) = self.form.fields.get_mut(&dep.target) else {
                    continue;
                };

                match &dep.reaction {
                    Reaction::Clear => {
                        if target.value.take().is_some() {
                            changed.insert(dep.target.clone());
                        }
                        report.cleared.push(dep.target.clone());
                    }
                    Reaction::FilterBy { param } => {
                        match source_value.as_ref().and_then(scalar_to_string) {
                            Some(v) => {
                                target.filters.insert(param.clone(), v);
                            }
                            None => {
                                target.filters.remove(param);
                            }
                        }
                        report.filtered.push(dep.target.clone());
                    }
                    Reaction::Requery(kind) => {
                        // anything derived from the previous source value is void
                        if kind.fills_value() {
                            if target.value.take().is_some() {
                                changed.insert(dep.target.clone());
                            }
                            report.cleared.push(dep.target.clone());
                        } else {
                            target.placeholder = None;
                        }
                        match &source_value {
                            Some(v) if !v.is_null() => {
                                let ticket = self.tracker.begin(&dep.target);
                                report.follow_ups.push(FollowUp {
                                    ticket,
                                    target: dep.target.clone(),
                                    kind: *kind,
                                    source_value: v.clone(),
                                });
                            }
                            _ => self.tracker.cancel(&dep.target),
                        }
                    }
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_fields::types::{FieldDescriptor, FieldKind};
    use serde_json::json;

    fn form() -> EntityForm {
        let fields = FieldSet::from_fields(vec![
            FieldDescriptor::related("part", "/api/part/", "part"),
            FieldDescriptor::related("supplier_part", "/api/company/part/", "supplierpart"),
            FieldDescriptor::new("pack", FieldKind::Decimal),
            FieldDescriptor::new("batch", FieldKind::String),
        ]);
        EntityForm::new(
            fields,
            vec![
                Dependency::clear("part", "supplier_part"),
                Dependency::filter_by("part", "supplier_part", "part"),
                Dependency::clear("supplier_part", "pack"),
                Dependency::requery("part", "batch", FollowUpKind::NextBatchCode),
                Dependency::clear("part", "missing"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn dependencies_on_removed_fields_are_dropped() {
        let form = form();
        assert_eq!(form.dependencies.dependencies().len(), 4);
    }

    #[test]
    fn clear_cascades_in_one_pass() {
        let mut state = FormState::new(form());
        state.set_value("supplier_part", Some(json!(5))).unwrap();
        state.set_value("pack", Some(json!(10))).unwrap();

        let report = state.set_value("part", Some(json!(1))).unwrap();
        assert_eq!(report.cleared, vec!["supplier_part", "pack"]);
        assert_eq!(state.value("pack"), None);
        assert_eq!(
            state.fields().get("supplier_part").unwrap().filters.get("part"),
            Some(&"1".to_string())
        );
    }

    #[test]
    fn clearing_source_removes_filter_and_cancels_lookup() {
        let mut state = FormState::new(form());
        let report = state.set_value("part", Some(json!(1))).unwrap();
        assert_eq!(state.pending(), 1);

        state.set_value("part", None).unwrap();
        assert!(state
            .fields()
            .get("supplier_part")
            .unwrap()
            .filters
            .get("part")
            .is_none());
        assert_eq!(state.apply_follow_up(&report.follow_ups[0], Some(json!("B-1"))), None);
        assert_eq!(state.value("batch"), None);
    }

    #[test]
    fn stale_follow_up_is_dropped() {
        let mut state = FormState::new(form());
        let first = state.set_value("part", Some(json!(1))).unwrap();
        let second = state.set_value("part", Some(json!(2))).unwrap();

        // Responses arrive out of order
        assert!(state
            .apply_follow_up(&second.follow_ups[0], Some(json!("B-2")))
            .is_some());
        assert!(state
            .apply_follow_up(&first.follow_ups[0], Some(json!("B-1")))
            .is_none());
        let batch = state.fields().get("batch").unwrap();
        assert_eq!(batch.placeholder.as_deref(), Some("B-2"));
        assert_eq!(batch.value, None);
    }

    #[test]
    fn hint_is_reset_when_source_changes() {
        let mut state = FormState::new(form());
        let first = state.set_value("part", Some(json!(1))).unwrap();
        state.apply_follow_up(&first.follow_ups[0], Some(json!("B-1")));
        state.set_value("batch", Some(json!("MANUAL"))).unwrap();

        let second = state.set_value("part", Some(json!(2))).unwrap();
        assert_eq!(state.fields().get("batch").unwrap().placeholder, None);
        // typed by the user, not derived from the part
        assert_eq!(state.value("batch"), Some(&json!("MANUAL")));

        state.apply_follow_up(&second.follow_ups[0], None);
        assert_eq!(state.fields().get("batch").unwrap().placeholder, None);
    }

    #[test]
    fn value_follow_up_target_is_emptied_until_the_lookup_returns() {
        let fields = FieldSet::from_fields(vec![
            FieldDescriptor::related("part", "/api/part/", "part"),
            FieldDescriptor::new("expiry_date", FieldKind::Date),
            FieldDescriptor::new("note", FieldKind::String),
        ]);
        let form = EntityForm::new(
            fields,
            vec![
                Dependency::requery("part", "expiry_date", FollowUpKind::ExpiryFromPart),
                Dependency::clear("expiry_date", "note"),
            ],
        )
        .unwrap();
        let mut state = FormState::new(form);

        let first = state.set_value("part", Some(json!(1))).unwrap();
        state.apply_follow_up(&first.follow_ups[0], Some(json!("2030-01-01")));
        state.set_value("note", Some(json!("checked"))).unwrap();

        let second = state.set_value("part", Some(json!(2))).unwrap();
        assert_eq!(second.cleared, vec!["expiry_date", "note"]);
        assert_eq!(state.value("expiry_date"), None);
        assert!(!state.fields().submission().contains_key("expiry_date"));

        state.apply_follow_up(&second.follow_ups[0], Some(Value::Null));
        assert_eq!(state.value("expiry_date"), None);
    }

    #[test]
    fn cancel_pending_drops_everything() {
        let mut state = FormState::new(form());
        let report = state.set_value("part", Some(json!(1))).unwrap();
        state.cancel_pending();
        assert!(state
            .apply_follow_up(&report.follow_ups[0], Some(json!("B-1")))
            .is_none());
    }

    #[test]
    fn unknown_field_is_an_error() {
        let mut state = FormState::new(form());
        assert_eq!(
            state.set_value("nope", None),
            Err(FormError::UnknownField("nope".to_string()))
        );
    }

    #[test]
    fn seeding_applies_filters() {
        let form = form().seed(&json!({"part": 12, "supplier_part": 4}));
        let supplier_part = form.fields.get("supplier_part").unwrap();
        assert_eq!(supplier_part.value, Some(json!(4)));
        assert_eq!(supplier_part.filters.get("part"), Some(&"12".to_string()));
    }

    #[test]
    fn construction_is_idempotent() {
        assert_eq!(form(), form());
    }
}
