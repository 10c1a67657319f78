use crate::shared::table_filters::common::active_filter;
use crate::shared::table_filters::TableFilter;

pub fn part_filters() -> Vec<TableFilter> {
    vec![
        active_filter("Show active parts"),
        TableFilter::api("category", "Category", "/api/part/category/", "partcategory")
            .description("Filter by part category"),
        TableFilter::boolean("cascade", "Include Subcategories")
            .description("Include parts in subcategories"),
        TableFilter::boolean("locked", "Locked").description("Show locked parts"),
        TableFilter::boolean("assembly", "Assembly").description("Show assembly parts"),
        TableFilter::boolean("component", "Component").description("Show component parts"),
        TableFilter::boolean("testable", "Testable").description("Show testable parts"),
        TableFilter::boolean("trackable", "Trackable").description("Show trackable parts"),
        TableFilter::boolean("purchaseable", "Purchaseable")
            .description("Show purchaseable parts"),
        TableFilter::boolean("salable", "Salable").description("Show salable parts"),
        TableFilter::boolean("virtual", "Virtual").description("Show virtual parts"),
        TableFilter::boolean("is_template", "Is Template").description("Show template parts"),
        TableFilter::boolean("is_variant", "Is Variant").description("Show variant parts"),
        TableFilter::boolean("is_revision", "Is Revision").description("Show revision parts"),
        TableFilter::boolean("has_revisions", "Has Revisions")
            .description("Show parts with revisions"),
        TableFilter::boolean("has_ipn", "Has IPN")
            .description("Show parts which have an internal part number"),
        TableFilter::boolean("has_units", "Has Units").description("Show parts with units"),
        TableFilter::boolean("has_stock", "Has Stock").description("Show parts which have stock"),
        TableFilter::boolean("low_stock", "Low Stock")
            .description("Show parts which have low stock"),
        TableFilter::boolean("unallocated_stock", "Available Stock")
            .description("Show parts which have available stock"),
        TableFilter::boolean("has_pricing", "Has Pricing")
            .description("Show parts which have pricing information"),
        TableFilter::boolean("starred", "Subscribed")
            .description("Show parts to which the user is subscribed"),
    ]
}

pub fn part_category_filters() -> Vec<TableFilter> {
    vec![
        TableFilter::boolean("cascade", "Include Subcategories")
            .description("Include subcategories in results"),
        TableFilter::boolean("structural", "Structural")
            .description("Show structural categories"),
        TableFilter::boolean("starred", "Subscribed")
            .description("Show categories to which the user is subscribed"),
    ]
}
