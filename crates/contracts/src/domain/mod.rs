//! Per-entity metadata: table filters, form builders and list records

pub mod a001_part;
pub mod a003_stock_item;
pub mod a004_stock_location;
pub mod a005_company;
pub mod a006_supplier_part;
pub mod a007_purchase_order;
pub mod a008_sales_order;
pub mod a009_return_order;
pub mod a010_transfer_order;
pub mod a011_build_order;
pub mod a012_project_code;
mod orders;

use crate::shared::form_fields::{EntityForm, FormContext, FormError, FormMode};
use crate::shared::settings::FeatureFlags;

/// Models which have a form builder
pub const FORM_MODELS: &[&str] = &[
    "part",
    "stockitem",
    "stocklocation",
    "company",
    "supplierpart",
    "purchaseorder",
    "salesorder",
    "returnorder",
    "transferorder",
    "build",
    "projectcode",
];

/// Form of a model by its API model name
pub fn entity_form(
    model: &str,
    mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    match model.trim().to_lowercase().as_str() {
        "part" => a001_part::part_form(mode, context, flags),
        "stockitem" => a003_stock_item::stock_item_form(mode, context, flags),
        "stocklocation" => a004_stock_location::stock_location_form(mode, context, flags),
        "company" => a005_company::company_form(mode, context, flags),
        "supplierpart" => a006_supplier_part::supplier_part_form(mode, context, flags),
        "purchaseorder" => a007_purchase_order::purchase_order_form(mode, context, flags),
        "salesorder" => a008_sales_order::sales_order_form(mode, context, flags),
        "returnorder" => a009_return_order::return_order_form(mode, context, flags),
        "transferorder" => a010_transfer_order::transfer_order_form(mode, context, flags),
        "build" => a011_build_order::build_order_form(mode, context, flags),
        "projectcode" => a012_project_code::project_code_form(mode, context, flags),
        _ => Err(FormError::UnknownModel(model.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_model_builds_in_both_modes() {
        let flag_sets = [
            FeatureFlags::default(),
            FeatureFlags {
                stock_expiry: true,
                project_codes: true,
                stock_ownership: true,
                plugin_panels: true,
                build_requires_responsible: true,
            },
        ];
        for flags in &flag_sets {
            for model in FORM_MODELS {
                for mode in [FormMode::Create, FormMode::Edit] {
                    let form = entity_form(model, mode, &FormContext::new(), flags)
                        .unwrap_or_else(|e| panic!("{model}: {e}"));
                    assert!(!form.fields.is_empty(), "{model} has no fields");
                }
            }
        }
    }

    #[test]
    fn project_code_field_is_removed_not_hidden() {
        for model in ["purchaseorder", "salesorder", "returnorder", "transferorder", "build"] {
            let form =
                entity_form(model, FormMode::Create, &FormContext::new(), &FeatureFlags::default())
                    .unwrap();
            assert!(!form.fields.contains("project_code"), "{model}");
        }
    }

    #[test]
    fn unknown_model() {
        assert_eq!(
            entity_form("widget", FormMode::Create, &FormContext::new(), &FeatureFlags::default()),
            Err(FormError::UnknownModel("widget".to_string()))
        );
    }
}
