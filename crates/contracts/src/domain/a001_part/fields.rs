use crate::shared::form_fields::{
    EntityForm, FieldDescriptor, FieldKind, FieldSet, FormContext, FormError, FormMode,
};
use crate::shared::settings::FeatureFlags;

/// Part form.
///
/// In create mode with a source record the form duplicates that part and
/// offers the `copy_*` switches.
pub fn part_form(
    mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::related("category", "/api/part/category/", "partcategory")
            .filter("structural", "false"),
        FieldDescriptor::new("name", FieldKind::String).required(),
        FieldDescriptor::new("IPN", FieldKind::String).label("IPN"),
        FieldDescriptor::new("revision", FieldKind::String),
        FieldDescriptor::related("revision_of", "/api/part/", "part")
            .filter("is_revision", "false")
            .filter("is_template", "false"),
        FieldDescriptor::new("description", FieldKind::String),
        FieldDescriptor::related("variant_of", "/api/part/", "part").filter("is_template", "true"),
        FieldDescriptor::new("keywords", FieldKind::String),
        FieldDescriptor::new("units", FieldKind::String),
        FieldDescriptor::new("link", FieldKind::Url),
        FieldDescriptor::related("default_location", "/api/stock/location/", "stocklocation")
            .filter("structural", "false"),
        FieldDescriptor::new("default_expiry", FieldKind::Integer)
            .help("Expiry time (in days) for stock items of this part"),
        FieldDescriptor::new("minimum_stock", FieldKind::Decimal),
        FieldDescriptor::related("responsible", "/api/user/owner/", "owner"),
        FieldDescriptor::new("component", FieldKind::Boolean),
        FieldDescriptor::new("assembly", FieldKind::Boolean),
        FieldDescriptor::new("is_template", FieldKind::Boolean),
        FieldDescriptor::new("testable", FieldKind::Boolean),
        FieldDescriptor::new("trackable", FieldKind::Boolean),
        FieldDescriptor::new("purchaseable", FieldKind::Boolean).value(true),
        FieldDescriptor::new("salable", FieldKind::Boolean),
        FieldDescriptor::new("virtual", FieldKind::Boolean),
        FieldDescriptor::new("locked", FieldKind::Boolean),
        FieldDescriptor::new("active", FieldKind::Boolean).value(true),
    ]);

    if !flags.stock_expiry {
        fields.remove("default_expiry");
    }

    match mode {
        FormMode::Create => {
            fields.remove("active");
            fields.remove("locked");
            if context.source.is_some() {
                for name in ["copy_image", "copy_bom", "copy_parameters", "copy_notes"] {
                    fields.insert(FieldDescriptor::new(name, FieldKind::Boolean).value(true));
                }
            }
        }
        FormMode::Edit => {}
    }

    EntityForm::build(fields, Vec::new(), context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicate_copies_values_and_adds_switches() {
        let source = json!({"pk": 9, "name": "Widget", "IPN": "W-1", "assembly": true});
        let form = part_form(
            FormMode::Create,
            &FormContext::from_record(source),
            &FeatureFlags::default(),
        )
        .unwrap();

        assert_eq!(form.fields.get("name").unwrap().value, Some(json!("Widget")));
        assert_eq!(form.fields.get("assembly").unwrap().value, Some(json!(true)));
        assert!(form.fields.contains("copy_bom"));
        assert!(!form.fields.contains("active"));
    }

    #[test]
    fn plain_create_has_no_copy_switches() {
        let form = part_form(FormMode::Create, &FormContext::new(), &FeatureFlags::default()).unwrap();
        assert!(!form.fields.contains("copy_bom"));
    }

    #[test]
    fn default_expiry_needs_the_expiry_setting() {
        let off = part_form(FormMode::Edit, &FormContext::new(), &FeatureFlags::default()).unwrap();
        assert!(!off.fields.contains("default_expiry"));

        let flags = FeatureFlags {
            stock_expiry: true,
            ..FeatureFlags::default()
        };
        let on = part_form(FormMode::Edit, &FormContext::new(), &flags).unwrap();
        assert!(on.fields.contains("default_expiry"));
        assert!(on.fields.contains("active"));
    }

    #[test]
    fn responsible_ignores_stock_ownership() {
        for stock_ownership in [false, true] {
            let flags = FeatureFlags {
                stock_ownership,
                ..FeatureFlags::default()
            };
            let form = part_form(FormMode::Create, &FormContext::new(), &flags).unwrap();
            assert!(form.fields.contains("responsible"));
        }
    }
}
