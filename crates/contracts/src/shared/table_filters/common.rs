//! Filter builders shared between several tables

use crate::shared::choices::{Choice, RemoteChoices};
use crate::shared::settings::FeatureFlags;

use super::types::TableFilter;

pub fn status_filter(choices: Vec<Choice>) -> TableFilter {
    TableFilter::choice("status", "Status", choices).description("Filter by status")
}

pub fn active_filter(description: &str) -> TableFilter {
    TableFilter::boolean("active", "Active").description(description)
}

/// `project_code` / `has_project_code`, only when project codes are enabled
pub fn project_code_filters(flags: &FeatureFlags) -> Vec<TableFilter> {
    if !flags.project_codes {
        return Vec::new();
    }

    vec![
        TableFilter::remote("project_code", "Project Code", RemoteChoices::project_codes())
            .description("Filter by project code"),
        TableFilter::boolean("has_project_code", "Has Project Code")
            .description("Filter by whether a project code is assigned"),
    ]
}

pub fn responsible_filter() -> TableFilter {
    TableFilter::remote("assigned_to", "Responsible", RemoteChoices::owners())
        .description("Filter by responsible owner")
}

pub fn issued_by_filter() -> TableFilter {
    TableFilter::remote("issued_by", "Issued By", RemoteChoices::users())
        .description("Filter by user who issued this order")
}

pub fn created_by_filter() -> TableFilter {
    TableFilter::remote("created_by", "Created By", RemoteChoices::users())
        .description("Filter by user who created this order")
}

/// Filters common to purchase, sales, return and transfer orders
pub fn order_filters(status_choices: Vec<Choice>, flags: &FeatureFlags) -> Vec<TableFilter> {
    let mut filters = vec![
        status_filter(status_choices),
        TableFilter::boolean("outstanding", "Outstanding")
            .description("Show outstanding orders"),
        TableFilter::boolean("overdue", "Overdue").description("Show overdue orders"),
        TableFilter::boolean("assigned_to_me", "Assigned to me")
            .description("Show orders assigned to me"),
        TableFilter::boolean("has_target_date", "Has Target Date")
            .description("Show orders with a target date"),
        TableFilter::boolean("has_start_date", "Has Start Date")
            .description("Show orders with a start date"),
        TableFilter::date("target_date_before", "Target Date Before")
            .description("Show orders with a target date before this date"),
        TableFilter::date("target_date_after", "Target Date After")
            .description("Show orders with a target date after this date"),
        TableFilter::date("created_before", "Created Before"),
        TableFilter::date("created_after", "Created After"),
        responsible_filter(),
        created_by_filter(),
    ];
    filters.extend(project_code_filters(flags));
    filters
}
