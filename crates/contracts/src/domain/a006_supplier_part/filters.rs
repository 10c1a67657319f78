use crate::shared::table_filters::common::active_filter;
use crate::shared::table_filters::TableFilter;

pub fn supplier_part_filters() -> Vec<TableFilter> {
    vec![
        active_filter("Show active supplier parts"),
        TableFilter::boolean("part_active", "Active Part")
            .description("Show active internal parts"),
        TableFilter::boolean("supplier_active", "Active Supplier")
            .description("Show active suppliers"),
        TableFilter::boolean("has_stock", "In Stock")
            .description("Show supplier parts with stock"),
        TableFilter::api("supplier", "Supplier", "/api/company/", "company")
            .description("Filter by supplier"),
    ]
}
