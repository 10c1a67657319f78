use crate::enums::StockStatus;
use crate::shared::form_fields::{
    Dependency, EntityForm, FieldDescriptor, FieldKind, FieldSet, FollowUpKind, FormContext,
    FormError, FormMode,
};
use crate::shared::settings::FeatureFlags;

/// Create / edit form of a stock item
pub fn stock_item_form(
    mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::related("part", "/api/part/", "part")
            .required()
            .filter("active", "true")
            .filter("virtual", "false"),
        FieldDescriptor::related("supplier_part", "/api/company/part/", "supplierpart")
            .filter("part_detail", "true")
            .filter("supplier_detail", "true"),
        FieldDescriptor::new("use_pack_size", FieldKind::Boolean)
            .help("Add the given quantity as packs instead of individual items"),
        FieldDescriptor::related("location", "/api/stock/location/", "stocklocation")
            .icon("location")
            .filter("structural", "false"),
        FieldDescriptor::new("quantity", FieldKind::Decimal)
            .required()
            .help("Enter initial quantity for this stock item")
            .value(1),
        FieldDescriptor::new("serial_numbers", FieldKind::String)
            .label("Serial Numbers")
            .help("Enter serial numbers for new stock (or leave blank)"),
        FieldDescriptor::new("batch", FieldKind::String).icon("batch"),
        FieldDescriptor::choice("status", StockStatus::choices()).value(StockStatus::Ok.code()),
        FieldDescriptor::new("expiry_date", FieldKind::Date).icon("calendar"),
        FieldDescriptor::new("purchase_price", FieldKind::Decimal).icon("currency"),
        FieldDescriptor::new("purchase_price_currency", FieldKind::String).label("Currency"),
        FieldDescriptor::new("packaging", FieldKind::String).icon("packaging"),
        FieldDescriptor::new("link", FieldKind::Url),
        FieldDescriptor::related("owner", "/api/user/owner/", "owner").icon("user"),
        FieldDescriptor::new("delete_on_deplete", FieldKind::Boolean),
    ]);

    if !flags.stock_expiry {
        fields.remove("expiry_date");
    }
    if !flags.stock_ownership {
        fields.remove("owner");
    }
    if mode == FormMode::Edit {
        // Quantity and serials change through stock adjustments, not the edit form
        fields.remove("quantity");
        fields.remove("serial_numbers");
        fields.remove("use_pack_size");
        if let Some(part) = fields.get_mut("part") {
            part.disabled = true;
        }
    }

    let dependencies = vec![
        Dependency::clear("part", "supplier_part"),
        Dependency::filter_by("part", "supplier_part", "part"),
        Dependency::requery("part", "serial_numbers", FollowUpKind::NextSerialNumber),
        Dependency::requery("part", "batch", FollowUpKind::NextBatchCode),
        Dependency::requery("part", "expiry_date", FollowUpKind::ExpiryFromPart),
    ];

    EntityForm::build(fields, dependencies, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_fields::{ChangeReport, FollowUp, FormState};
    use serde_json::json;

    fn all_flags() -> FeatureFlags {
        FeatureFlags {
            stock_expiry: true,
            stock_ownership: true,
            ..FeatureFlags::default()
        }
    }

    #[test]
    fn create_form_contains_quantity_and_serials() {
        let form = stock_item_form(FormMode::Create, &FormContext::new(), &all_flags()).unwrap();
        for name in ["part", "quantity", "serial_numbers", "use_pack_size", "expiry_date", "owner"] {
            assert!(form.fields.contains(name), "missing {name}");
        }
        assert_eq!(form.fields.get("quantity").unwrap().value, Some(json!(1)));
    }

    #[test]
    fn flags_and_mode_remove_fields() {
        let form =
            stock_item_form(FormMode::Edit, &FormContext::new(), &FeatureFlags::default()).unwrap();
        for name in ["quantity", "serial_numbers", "use_pack_size", "expiry_date", "owner"] {
            assert!(!form.fields.contains(name), "{name} should be removed");
        }
        assert!(form.fields.get("part").unwrap().disabled);
        // only the supplier_part edges survive
        assert_eq!(form.dependencies.dependencies().len(), 3);
    }

    #[test]
    fn changing_part_resets_supplier_part() {
        let form = stock_item_form(FormMode::Create, &FormContext::new(), &all_flags()).unwrap();
        let mut state = FormState::new(form);

        state.set_value("part", Some(json!(1))).unwrap();
        state.set_value("supplier_part", Some(json!(40))).unwrap();

        let report = state.set_value("part", Some(json!(2))).unwrap();

        assert_eq!(state.value("supplier_part"), None);
        assert_eq!(
            state.fields().get("supplier_part").unwrap().filters.get("part"),
            Some(&"2".to_string())
        );
        assert!(report.cleared.contains(&"supplier_part".to_string()));

        let kinds: Vec<_> = report.follow_ups.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FollowUpKind::NextSerialNumber,
                FollowUpKind::NextBatchCode,
                FollowUpKind::ExpiryFromPart
            ]
        );
    }

    #[test]
    fn late_follow_up_for_previous_part_is_dropped() {
        let form = stock_item_form(FormMode::Create, &FormContext::new(), &all_flags()).unwrap();
        let mut state = FormState::new(form);

        let first = state.set_value("part", Some(json!(1))).unwrap();
        let second = state.set_value("part", Some(json!(2))).unwrap();

        let stale = first
            .follow_ups
            .iter()
            .find(|f| f.target == "batch")
            .unwrap();
        assert!(state.apply_follow_up(stale, Some(json!("BATCH-1"))).is_none());

        let fresh = second
            .follow_ups
            .iter()
            .find(|f| f.target == "batch")
            .unwrap();
        assert!(state.apply_follow_up(fresh, Some(json!("BATCH-2"))).is_some());
        assert_eq!(
            state.fields().get("batch").unwrap().placeholder.as_deref(),
            Some("BATCH-2")
        );
    }

    fn follow_up<'a>(report: &'a ChangeReport, target: &str) -> &'a FollowUp {
        report.follow_ups.iter().find(|f| f.target == target).unwrap()
    }

    #[test]
    fn serial_and_batch_lookups_are_hints_only() {
        let form = stock_item_form(FormMode::Create, &FormContext::new(), &all_flags()).unwrap();
        let mut state = FormState::new(form);

        let report = state.set_value("part", Some(json!(1))).unwrap();
        state.apply_follow_up(follow_up(&report, "serial_numbers"), Some(json!(17)));
        state.apply_follow_up(follow_up(&report, "batch"), Some(json!("B-0001")));

        let serials = state.fields().get("serial_numbers").unwrap();
        assert_eq!(serials.placeholder.as_deref(), Some("Next serial number: 17"));
        assert_eq!(serials.value, None);

        let submission = state.fields().submission();
        assert!(!submission.contains_key("serial_numbers"));
        assert!(!submission.contains_key("batch"));
    }

    #[test]
    fn switching_part_drops_values_derived_from_previous_part() {
        let form = stock_item_form(FormMode::Create, &FormContext::new(), &all_flags()).unwrap();
        let mut state = FormState::new(form);

        let part_a = state.set_value("part", Some(json!(1))).unwrap();
        state.apply_follow_up(follow_up(&part_a, "expiry_date"), Some(json!("2030-01-01")));
        state.apply_follow_up(follow_up(&part_a, "serial_numbers"), Some(json!(17)));
        assert_eq!(state.value("expiry_date"), Some(&json!("2030-01-01")));

        // part B has no default expiry and no serial numbers
        let part_b = state.set_value("part", Some(json!(2))).unwrap();
        assert_eq!(state.value("expiry_date"), None);
        for target in ["serial_numbers", "batch", "expiry_date"] {
            state.apply_follow_up(follow_up(&part_b, target), None);
        }
        assert_eq!(state.value("expiry_date"), None);
        assert_eq!(state.fields().get("serial_numbers").unwrap().placeholder, None);

        let submission = state.fields().submission();
        assert_eq!(submission.get("part"), Some(&json!(2)));
        assert!(!submission.contains_key("expiry_date"));
        assert!(!submission.contains_key("serial_numbers"));
    }

    #[test]
    fn clearing_part_drops_derived_values() {
        let form = stock_item_form(FormMode::Create, &FormContext::new(), &all_flags()).unwrap();
        let mut state = FormState::new(form);

        let report = state.set_value("part", Some(json!(1))).unwrap();
        state.apply_follow_up(follow_up(&report, "expiry_date"), Some(json!("2030-01-01")));
        state.apply_follow_up(follow_up(&report, "serial_numbers"), Some(json!(17)));

        let cleared = state.set_value("part", None).unwrap();
        assert!(cleared.follow_ups.is_empty());
        assert!(cleared.cleared.contains(&"expiry_date".to_string()));
        assert_eq!(state.value("expiry_date"), None);
        assert_eq!(state.fields().get("serial_numbers").unwrap().placeholder, None);
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn edit_seeds_from_record() {
        let record = json!({"pk": 5, "part": 3, "supplier_part": 8, "batch": "X", "status": 50});
        let form = stock_item_form(
            FormMode::Edit,
            &FormContext::from_record(record),
            &FeatureFlags::default(),
        )
        .unwrap();

        assert_eq!(form.fields.get("batch").unwrap().value, Some(json!("X")));
        assert_eq!(form.fields.get("status").unwrap().value, Some(json!(50)));
        assert_eq!(
            form.fields.get("supplier_part").unwrap().filters.get("part"),
            Some(&"3".to_string())
        );
    }

    #[test]
    fn page_context_preselects_location() {
        let context = FormContext::new().with("location", 12).with("part", 4);
        let form = stock_item_form(FormMode::Create, &context, &FeatureFlags::default()).unwrap();
        assert_eq!(form.fields.get("location").unwrap().value, Some(json!(12)));
        assert_eq!(
            form.fields.get("supplier_part").unwrap().filters.get("part"),
            Some(&"4".to_string())
        );
    }
}
