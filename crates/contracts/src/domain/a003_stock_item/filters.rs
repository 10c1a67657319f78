use crate::enums::{StockStatus, TestResult};
use crate::shared::settings::FeatureFlags;
use crate::shared::table_filters::TableFilter;

/// Filters of the stock item table
pub fn stock_filters(flags: &FeatureFlags) -> Vec<TableFilter> {
    let mut filters = vec![
        TableFilter::boolean("active", "Active").description("Show stock for active parts"),
        TableFilter::boolean("assembly", "Assembly").description("Show stock for assembled parts"),
        TableFilter::boolean("allocated", "Allocated")
            .description("Show items which have been allocated"),
        TableFilter::boolean("available", "Available")
            .description("Show items which are available"),
        TableFilter::boolean("cascade", "Include Sublocations")
            .description("Include stock in sublocations"),
        TableFilter::boolean("depleted", "Depleted").description("Show depleted stock items"),
        TableFilter::boolean("in_stock", "In Stock").description("Show items which are in stock"),
        TableFilter::boolean("is_building", "In Production")
            .description("Show items which are in production"),
        TableFilter::boolean("include_variants", "Include Variants")
            .description("Include stock items for variant parts"),
        TableFilter::boolean("installed", "Installed")
            .description("Show stock items which are installed in other items"),
        TableFilter::boolean("sent_to_customer", "Sent to Customer")
            .description("Show items which have been sent to a customer"),
        TableFilter::boolean("serialized", "Is Serialized")
            .description("Show items which have a serial number"),
        TableFilter::text("serial", "Serial").description("Serial number"),
        TableFilter::text("serial_gte", "Serial Above")
            .description("Show items with serial numbers greater than or equal to this value"),
        TableFilter::text("serial_lte", "Serial Below")
            .description("Show items with serial numbers less than or equal to this value"),
        TableFilter::choice("status", "Status", StockStatus::choices())
            .description("Filter by stock status"),
        TableFilter::boolean("has_batch", "Has Batch Code")
            .description("Show items which have a batch code"),
        TableFilter::text("batch", "Batch").description("Batch code"),
        TableFilter::boolean("tracked", "Tracked")
            .description("Show tracked items (serial number or batch code)"),
        TableFilter::boolean("has_purchase_price", "Has Purchase Price")
            .description("Show items which have a purchase price"),
        TableFilter::date("expiry_date_lte", "Expiry Date Before")
            .description("Show items which expire before this date"),
        TableFilter::date("expiry_date_gte", "Expiry Date After")
            .description("Show items which expire after this date"),
        TableFilter::boolean("external", "External Location")
            .description("Show items in an external location"),
    ];

    if flags.stock_expiry {
        filters.push(
            TableFilter::boolean("expired", "Expired").description("Show items which have expired"),
        );
        filters.push(
            TableFilter::boolean("stale", "Stale")
                .description("Show items which are close to expiry"),
        );
    }

    filters
}

/// Filters of the stock item test result table
pub fn stock_test_filters() -> Vec<TableFilter> {
    vec![
        TableFilter::choice("result", "Result", TestResult::choices()).description("Filter by test result"),
        TableFilter::boolean("required", "Required").description("Show results for required tests"),
        TableFilter::boolean("include_installed", "Include Installed")
            .description("Show results for installed stock items"),
        TableFilter::date("finished_before", "Finished Before"),
        TableFilter::date("finished_after", "Finished After"),
    ]
}
