use crate::enums::TransferOrderStatus;
use crate::shared::settings::FeatureFlags;
use crate::shared::table_filters::common::order_filters;
use crate::shared::table_filters::TableFilter;

pub fn transfer_order_filters(flags: &FeatureFlags) -> Vec<TableFilter> {
    let mut filters = order_filters(TransferOrderStatus::choices(), flags);
    filters.push(
        TableFilter::api("take_from", "Source Location", "/api/stock/location/", "stocklocation")
            .description("Filter by source location"),
    );
    filters.push(
        TableFilter::api("destination", "Destination", "/api/stock/location/", "stocklocation")
            .description("Filter by destination location"),
    );
    filters
}
