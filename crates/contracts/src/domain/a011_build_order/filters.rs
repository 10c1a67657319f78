use crate::enums::BuildStatus;
use crate::shared::settings::FeatureFlags;
use crate::shared::table_filters::common::{
    issued_by_filter, project_code_filters, responsible_filter, status_filter,
};
use crate::shared::table_filters::TableFilter;

pub fn build_order_filters(flags: &FeatureFlags) -> Vec<TableFilter> {
    let mut filters = vec![
        TableFilter::boolean("outstanding", "Outstanding").description("Show outstanding orders"),
        status_filter(BuildStatus::choices()),
        TableFilter::boolean("overdue", "Overdue").description("Show overdue orders"),
        TableFilter::boolean("assigned_to_me", "Assigned to me")
            .description("Show orders assigned to me"),
        TableFilter::boolean("has_start_date", "Has Start Date")
            .description("Show orders with a start date"),
        TableFilter::boolean("has_target_date", "Has Target Date")
            .description("Show orders with a target date"),
        TableFilter::date("start_date_before", "Start Date Before"),
        TableFilter::date("start_date_after", "Start Date After"),
        TableFilter::date("target_date_before", "Target Date Before"),
        TableFilter::date("target_date_after", "Target Date After"),
        TableFilter::date("completed_before", "Completed Before")
            .description("Show orders completed before this date"),
        TableFilter::date("completed_after", "Completed After")
            .description("Show orders completed after this date"),
        TableFilter::boolean("external", "External").description("Show external build orders"),
        TableFilter::api("part", "Part", "/api/part/", "part")
            .description("Filter by assembly part"),
        issued_by_filter(),
        responsible_filter(),
    ];
    filters.extend(project_code_filters(flags));
    filters
}
