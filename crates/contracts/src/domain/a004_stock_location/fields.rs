use crate::shared::form_fields::{
    EntityForm, FieldDescriptor, FieldKind, FieldSet, FormContext, FormError, FormMode,
};
use crate::shared::settings::FeatureFlags;

pub fn stock_location_form(
    _mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::related("parent", "/api/stock/location/", "stocklocation")
            .label("Parent Location")
            .icon("location"),
        FieldDescriptor::new("name", FieldKind::String).required(),
        FieldDescriptor::new("description", FieldKind::String),
        FieldDescriptor::new("structural", FieldKind::Boolean),
        FieldDescriptor::new("external", FieldKind::Boolean),
        FieldDescriptor::related("location_type", "/api/stock/location-type/", "stocklocationtype"),
        FieldDescriptor::related("owner", "/api/user/owner/", "owner"),
    ]);

    if !flags.stock_ownership {
        fields.remove("owner");
    }

    EntityForm::build(fields, Vec::new(), context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_sublocation_gets_parent() {
        let context = FormContext::new().with("parent", 3);
        let form = stock_location_form(FormMode::Create, &context, &FeatureFlags::default()).unwrap();
        assert_eq!(form.fields.get("parent").unwrap().value, Some(json!(3)));
        assert!(!form.fields.contains("owner"));
    }
}
