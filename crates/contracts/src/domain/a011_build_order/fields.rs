use crate::shared::form_fields::{
    Dependency, EntityForm, FieldDescriptor, FieldKind, FieldSet, FollowUpKind, FormContext,
    FormError, FormMode,
};
use crate::shared::settings::FeatureFlags;

pub fn build_order_form(
    mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::new("reference", FieldKind::String).required(),
        FieldDescriptor::related("part", "/api/part/", "part")
            .required()
            .filter("assembly", "true")
            .filter("active", "true"),
        FieldDescriptor::new("title", FieldKind::String).label("Description"),
        FieldDescriptor::new("quantity", FieldKind::Decimal).required().value(1),
        FieldDescriptor::related("project_code", "/api/project-code/", "projectcode"),
        FieldDescriptor::new("priority", FieldKind::Integer),
        FieldDescriptor::related("parent", "/api/build/", "build").label("Parent Build"),
        FieldDescriptor::related("sales_order", "/api/order/so/", "salesorder"),
        FieldDescriptor::new("batch", FieldKind::String).icon("batch"),
        FieldDescriptor::related("take_from", "/api/stock/location/", "stocklocation")
            .label("Source Location"),
        FieldDescriptor::related("destination", "/api/stock/location/", "stocklocation")
            .filter("structural", "false"),
        FieldDescriptor::new("start_date", FieldKind::Date).icon("calendar"),
        FieldDescriptor::new("target_date", FieldKind::Date).icon("calendar"),
        FieldDescriptor::new("link", FieldKind::Url),
        FieldDescriptor::related("issued_by", "/api/user/", "user").icon("user"),
        FieldDescriptor::related("responsible", "/api/user/owner/", "owner")
            .icon("user")
            .required_if(flags.build_requires_responsible),
        FieldDescriptor::new("external", FieldKind::Boolean),
    ]);

    if !flags.project_codes {
        fields.remove("project_code");
    }
    if mode == FormMode::Edit {
        if let Some(part) = fields.get_mut("part") {
            part.disabled = true;
        }
    }

    let dependencies = vec![
        Dependency::filter_by("part", "sales_order", "part"),
        Dependency::filter_by("part", "parent", "part"),
        Dependency::requery("part", "batch", FollowUpKind::NextBatchCode),
    ];

    EntityForm::build(fields, dependencies, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_fields::FormState;
    use serde_json::json;

    #[test]
    fn responsible_required_by_setting() {
        let flags = FeatureFlags {
            build_requires_responsible: true,
            ..FeatureFlags::default()
        };
        let form = build_order_form(FormMode::Create, &FormContext::new(), &flags).unwrap();
        assert!(form.fields.get("responsible").unwrap().required);

        let form =
            build_order_form(FormMode::Create, &FormContext::new(), &FeatureFlags::default()).unwrap();
        assert!(!form.fields.get("responsible").unwrap().required);
    }

    #[test]
    fn part_filters_related_orders_and_requests_batch() {
        let form =
            build_order_form(FormMode::Create, &FormContext::new(), &FeatureFlags::default()).unwrap();
        let mut state = FormState::new(form);

        let report = state.set_value("part", Some(json!(21))).unwrap();
        assert_eq!(report.filtered, vec!["sales_order", "parent"]);
        assert_eq!(report.follow_ups.len(), 1);
        assert_eq!(report.follow_ups[0].target, "batch");
        assert_eq!(
            state.fields().get("parent").unwrap().filters.get("part"),
            Some(&"21".to_string())
        );
    }
}
