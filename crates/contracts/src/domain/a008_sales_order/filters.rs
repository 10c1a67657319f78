use crate::enums::SalesOrderStatus;
use crate::shared::settings::FeatureFlags;
use crate::shared::table_filters::common::order_filters;
use crate::shared::table_filters::TableFilter;

pub fn sales_order_filters(flags: &FeatureFlags) -> Vec<TableFilter> {
    let mut filters = order_filters(SalesOrderStatus::choices(), flags);
    filters.push(
        TableFilter::api("customer", "Customer", "/api/company/", "company")
            .description("Filter by customer"),
    );
    filters.push(
        TableFilter::date("shipment_date_before", "Shipped Before")
            .description("Show orders which were shipped before this date"),
    );
    filters.push(
        TableFilter::date("shipment_date_after", "Shipped After")
            .description("Show orders which were shipped after this date"),
    );
    filters
}
