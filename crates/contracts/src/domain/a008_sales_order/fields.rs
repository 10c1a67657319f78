use crate::domain::orders::{order_form, OrderCompany};
use crate::shared::form_fields::{EntityForm, FormContext, FormError, FormMode};
use crate::shared::settings::FeatureFlags;

pub fn sales_order_form(
    mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    order_form(
        OrderCompany {
            field: "customer",
            role_filter: "is_customer",
            reference_field: "customer_reference",
        },
        mode,
        context,
        flags,
    )
}
