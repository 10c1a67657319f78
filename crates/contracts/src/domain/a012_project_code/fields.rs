use crate::shared::form_fields::{
    EntityForm, FieldDescriptor, FieldKind, FieldSet, FormContext, FormError, FormMode,
};
use crate::shared::settings::FeatureFlags;

pub fn project_code_form(
    _mode: FormMode,
    context: &FormContext,
    _flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let fields = FieldSet::from_fields(vec![
        FieldDescriptor::new("code", FieldKind::String).required(),
        FieldDescriptor::new("description", FieldKind::String),
        FieldDescriptor::related("responsible", "/api/user/owner/", "owner").icon("user"),
    ]);
    EntityForm::build(fields, Vec::new(), context)
}
