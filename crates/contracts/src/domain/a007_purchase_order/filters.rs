use crate::enums::PurchaseOrderStatus;
use crate::shared::settings::FeatureFlags;
use crate::shared::table_filters::common::order_filters;
use crate::shared::table_filters::TableFilter;

pub fn purchase_order_filters(flags: &FeatureFlags) -> Vec<TableFilter> {
    let mut filters = order_filters(PurchaseOrderStatus::choices(), flags);
    filters.push(
        TableFilter::api("supplier", "Supplier", "/api/company/", "company")
            .description("Filter by supplier"),
    );
    filters
}
