use crate::domain::orders::{order_form, OrderCompany};
use crate::shared::form_fields::{EntityForm, FormContext, FormError, FormMode};
use crate::shared::settings::FeatureFlags;

pub fn purchase_order_form(
    mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    order_form(
        OrderCompany {
            field: "supplier",
            role_filter: "is_supplier",
            reference_field: "supplier_reference",
        },
        mode,
        context,
        flags,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_fields::FormState;
    use serde_json::json;

    #[test]
    fn supplier_change_resets_contact_and_address() {
        let record = json!({"pk": 1, "reference": "PO-0001", "supplier": 4, "contact": 2, "address": 6});
        let form = purchase_order_form(
            FormMode::Create,
            &FormContext::from_record(record),
            &FeatureFlags::default(),
        )
        .unwrap();
        let mut state = FormState::new(form);

        let report = state.set_value("supplier", Some(json!(9))).unwrap();
        assert_eq!(report.cleared, vec!["contact", "address"]);
        assert_eq!(state.value("contact"), None);
        assert_eq!(state.value("address"), None);
        assert_eq!(
            state.fields().get("address").unwrap().filters.get("company"),
            Some(&"9".to_string())
        );
    }

    #[test]
    fn project_code_follows_setting() {
        let off = purchase_order_form(FormMode::Create, &FormContext::new(), &FeatureFlags::default())
            .unwrap();
        assert!(!off.fields.contains("project_code"));

        let flags = FeatureFlags {
            project_codes: true,
            ..FeatureFlags::default()
        };
        let on = purchase_order_form(FormMode::Edit, &FormContext::new(), &flags).unwrap();
        assert!(on.fields.contains("project_code"));
        assert!(on.fields.get("supplier").unwrap().disabled);
    }
}
