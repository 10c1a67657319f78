use crate::shared::form_fields::{
    EntityForm, FieldDescriptor, FieldKind, FieldSet, FormContext, FormError, FormMode,
};
use crate::shared::settings::FeatureFlags;

/// Transfer of stock between two locations
pub fn transfer_order_form(
    _mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::new("reference", FieldKind::String).required(),
        FieldDescriptor::new("description", FieldKind::String),
        FieldDescriptor::related("take_from", "/api/stock/location/", "stocklocation")
            .label("Source Location")
            .icon("location"),
        FieldDescriptor::related("destination", "/api/stock/location/", "stocklocation")
            .required()
            .icon("location")
            .filter("structural", "false"),
        FieldDescriptor::related("project_code", "/api/project-code/", "projectcode"),
        FieldDescriptor::new("start_date", FieldKind::Date).icon("calendar"),
        FieldDescriptor::new("target_date", FieldKind::Date).icon("calendar"),
        FieldDescriptor::new("link", FieldKind::Url),
        FieldDescriptor::related("responsible", "/api/user/owner/", "owner").icon("user"),
    ]);

    if !flags.project_codes {
        fields.remove("project_code");
    }

    EntityForm::build(fields, Vec::new(), context)
}
