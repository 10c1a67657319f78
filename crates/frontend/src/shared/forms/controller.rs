//! Reactive wrapper around [`FormState`]
//!
//! The form state lives in a `StoredValue`; every mutation republishes the
//! field set through `fields` so widgets re-render. Follow-up lookups run in
//! the background and are applied only while their ticket is still current.

use contracts::shared::form_fields::{
    ChangeReport, EntityForm, FieldDescriptor, FieldSet, FollowUp, FormState, ValidationErrors,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

use super::follow_ups::resolve_follow_up;

#[derive(Clone, Copy)]
pub struct FormController {
    state: StoredValue<Option<FormState>>,
    pub fields: RwSignal<FieldSet>,
    pub errors: RwSignal<ValidationErrors>,
}

impl FormController {
    pub fn new() -> Self {
        let controller = Self {
            state: StoredValue::new(None),
            fields: RwSignal::new(FieldSet::new()),
            errors: RwSignal::new(ValidationErrors::default()),
        };
        let state = controller.state;
        on_cleanup(move || {
            let _ = state.try_update_value(|s| {
                if let Some(s) = s {
                    s.cancel_pending();
                }
            });
        });
        controller
    }

    /// Replace the form being edited
    pub fn install(&self, form: EntityForm) {
        self.fields.set(form.fields.clone());
        self.errors.set(ValidationErrors::default());
        self.state.update_value(|s| {
            if let Some(old) = s {
                old.cancel_pending();
            }
            *s = Some(FormState::new(form));
        });
    }

    pub fn is_ready(&self) -> bool {
        self.state.with_value(Option::is_some)
    }

    /// Reactive view of one field
    pub fn field(&self, name: &str) -> Signal<FieldDescriptor> {
        let fields = self.fields;
        let name = name.to_string();
        Signal::derive(move || {
            fields
                .with(|f| f.get(&name).cloned())
                .unwrap_or_else(|| FieldDescriptor::new(&name, Default::default()))
        })
    }

    pub fn set_value(&self, name: &str, value: Option<Value>) {
        let result = self
            .state
            .try_update_value(|s| s.as_mut().map(|s| s.set_value(name, value)))
            .flatten();
        match result {
            Some(Ok(report)) => {
                self.errors.update(|e| {
                    e.fields.remove(name);
                });
                self.apply(report);
            }
            Some(Err(e)) => log::warn!("{}", e),
            None => {}
        }
    }

    fn apply(&self, report: ChangeReport) {
        if let Some(fields) = self.state.with_value(|s| s.as_ref().map(|s| s.fields().clone())) {
            self.fields.set(fields);
        }
        if !report.cleared.is_empty() {
            log::debug!("Cleared dependent fields: {:?}", report.cleared);
        }
        for follow_up in report.follow_ups {
            self.dispatch(follow_up);
        }
    }

    fn dispatch(&self, follow_up: FollowUp) {
        let this = *self;
        spawn_local(async move {
            let value = match resolve_follow_up(follow_up.kind, &follow_up.source_value).await {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("{:?} lookup for '{}' failed: {}", follow_up.kind, follow_up.target, e);
                    None
                }
            };
            // None: form gone or ticket stale
            let report = this
                .state
                .try_update_value(|s| s.as_mut().and_then(|s| s.apply_follow_up(&follow_up, value)))
                .flatten();
            if let Some(report) = report {
                this.apply(report);
            }
        });
    }

    /// Request body of the current values
    pub fn submission(&self) -> Map<String, Value> {
        self.state
            .with_value(|s| s.as_ref().map(|s| s.fields().submission()))
            .unwrap_or_default()
    }

    pub fn set_errors(&self, body: &Value) {
        let errors = self
            .fields
            .with_untracked(|f| ValidationErrors::from_response(body, &f.names()));
        self.errors.set(errors);
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
