use crate::shared::form_fields::{
    EntityForm, FieldDescriptor, FieldKind, FieldSet, FormContext, FormError, FormMode,
};
use crate::shared::settings::FeatureFlags;

pub fn company_form(
    mode: FormMode,
    context: &FormContext,
    _flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::new("name", FieldKind::String).required(),
        FieldDescriptor::new("description", FieldKind::String),
        FieldDescriptor::new("website", FieldKind::Url),
        FieldDescriptor::new("currency", FieldKind::String),
        FieldDescriptor::new("phone", FieldKind::String),
        FieldDescriptor::new("email", FieldKind::Email),
        FieldDescriptor::new("tax_id", FieldKind::String).label("Tax ID"),
        FieldDescriptor::new("is_supplier", FieldKind::Boolean),
        FieldDescriptor::new("is_manufacturer", FieldKind::Boolean),
        FieldDescriptor::new("is_customer", FieldKind::Boolean),
        FieldDescriptor::new("active", FieldKind::Boolean).value(true),
    ]);

    if mode.is_create() {
        fields.remove("active");
    }

    EntityForm::build(fields, Vec::new(), context)
}
