//! Form field metadata
//!
//! Entity builders (see `crate::domain`) return an [`EntityForm`]: an ordered
//! [`FieldSet`] plus a declared [`DependencyGraph`]. The UI wraps it in a
//! [`FormState`], which runs reactions when a value changes and hands back
//! [`FollowUp`] lookups to execute against the server.

mod context;
mod dependencies;
mod error;
mod schema;
mod state;
mod types;
mod validation;

pub use context::FormContext;
pub use dependencies::{Dependency, DependencyGraph, FollowUpKind, Reaction};
pub use error::FormError;
pub use schema::{merge_schema, FieldOverride, OptionsSchema, SchemaField};
pub use state::{ChangeReport, EntityForm, FollowUp, FormState};
pub use types::{FieldDescriptor, FieldKind, FieldSet, FormMode};
pub use validation::ValidationErrors;
