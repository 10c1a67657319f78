use crate::enums::ReturnOrderStatus;
use crate::shared::settings::FeatureFlags;
use crate::shared::table_filters::common::order_filters;
use crate::shared::table_filters::TableFilter;

pub fn return_order_filters(flags: &FeatureFlags) -> Vec<TableFilter> {
    let mut filters = order_filters(ReturnOrderStatus::choices(), flags);
    filters.push(
        TableFilter::api("customer", "Customer", "/api/company/", "company")
            .description("Filter by customer"),
    );
    filters
}
