use crate::shared::form_fields::{
    Dependency, EntityForm, FieldDescriptor, FieldKind, FieldSet, FormContext, FormError,
    FormMode,
};
use crate::shared::settings::FeatureFlags;

pub fn supplier_part_form(
    mode: FormMode,
    context: &FormContext,
    _flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::related("part", "/api/part/", "part")
            .required()
            .filter("purchaseable", "true")
            .filter("active", "true"),
        FieldDescriptor::related("manufacturer_part", "/api/company/part/manufacturer/", "manufacturerpart")
            .filter("manufacturer_detail", "true"),
        FieldDescriptor::related("supplier", "/api/company/", "company")
            .required()
            .filter("is_supplier", "true")
            .filter("active", "true"),
        FieldDescriptor::new("SKU", FieldKind::String).label("SKU").required(),
        FieldDescriptor::new("description", FieldKind::String),
        FieldDescriptor::new("link", FieldKind::Url),
        FieldDescriptor::new("note", FieldKind::String),
        FieldDescriptor::new("pack_quantity", FieldKind::String),
        FieldDescriptor::new("packaging", FieldKind::String).icon("packaging"),
        FieldDescriptor::new("active", FieldKind::Boolean).value(true),
    ]);

    if mode == FormMode::Edit {
        if let Some(part) = fields.get_mut("part") {
            part.disabled = true;
        }
    }

    let dependencies = vec![
        Dependency::clear("part", "manufacturer_part"),
        Dependency::filter_by("part", "manufacturer_part", "part"),
    ];

    EntityForm::build(fields, dependencies, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_fields::FormState;
    use serde_json::json;

    #[test]
    fn manufacturer_part_follows_part() {
        let form = supplier_part_form(
            FormMode::Create,
            &FormContext::new().with("part", 5),
            &FeatureFlags::default(),
        )
        .unwrap();
        assert_eq!(
            form.fields.get("manufacturer_part").unwrap().filters.get("part"),
            Some(&"5".to_string())
        );

        let mut state = FormState::new(form);
        state.set_value("manufacturer_part", Some(json!(11))).unwrap();
        state.set_value("part", None).unwrap();
        assert_eq!(state.value("manufacturer_part"), None);
        assert!(!state
            .fields()
            .get("manufacturer_part")
            .unwrap()
            .filters
            .contains_key("part"));
    }
}
