//! Field layout shared by purchase, sales and return orders

use crate::shared::form_fields::{
    Dependency, EntityForm, FieldDescriptor, FieldKind, FieldSet, FormContext, FormError,
    FormMode,
};
use crate::shared::settings::FeatureFlags;

/// Counterparty of an order form
pub(crate) struct OrderCompany {
    /// Field name: `supplier` or `customer`
    pub field: &'static str,
    /// Company flag the lookup is restricted to
    pub role_filter: &'static str,
    pub reference_field: &'static str,
}

pub(crate) fn order_form(
    company: OrderCompany,
    mode: FormMode,
    context: &FormContext,
    flags: &FeatureFlags,
) -> Result<EntityForm, FormError> {
    let mut company_field = FieldDescriptor::related(company.field, "/api/company/", "company")
        .required()
        .filter(company.role_filter, "true")
        .filter("active", "true");
    if mode == FormMode::Edit {
        company_field.disabled = true;
    }

    let mut fields = FieldSet::from_fields(vec![
        FieldDescriptor::new("reference", FieldKind::String).required(),
        FieldDescriptor::new("description", FieldKind::String),
        company_field,
        FieldDescriptor::new(company.reference_field, FieldKind::String),
        FieldDescriptor::related("project_code", "/api/project-code/", "projectcode"),
        FieldDescriptor::new("order_currency", FieldKind::String).label("Currency"),
        FieldDescriptor::new("start_date", FieldKind::Date).icon("calendar"),
        FieldDescriptor::new("target_date", FieldKind::Date).icon("calendar"),
        FieldDescriptor::new("link", FieldKind::Url),
        FieldDescriptor::related("contact", "/api/company/contact/", "contact").icon("user"),
        FieldDescriptor::related("address", "/api/company/address/", "address").icon("address"),
        FieldDescriptor::related("responsible", "/api/user/owner/", "owner").icon("user"),
    ]);

    if !flags.project_codes {
        fields.remove("project_code");
    }

    let dependencies = vec![
        Dependency::clear(company.field, "contact"),
        Dependency::filter_by(company.field, "contact", "company"),
        Dependency::clear(company.field, "address"),
        Dependency::filter_by(company.field, "address", "company"),
    ];

    EntityForm::build(fields, dependencies, context)
}
