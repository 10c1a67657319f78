use crate::shared::table_filters::common::active_filter;
use crate::shared::table_filters::TableFilter;

pub fn company_filters() -> Vec<TableFilter> {
    vec![
        active_filter("Show active companies"),
        TableFilter::boolean("is_supplier", "Supplier").description("Show companies which are suppliers"),
        TableFilter::boolean("is_manufacturer", "Manufacturer")
            .description("Show companies which are manufacturers"),
        TableFilter::boolean("is_customer", "Customer").description("Show companies which are customers"),
    ]
}
