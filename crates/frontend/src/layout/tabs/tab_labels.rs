//! Tab titles by tab key

pub const PART_DETAILS_PREFIX: &str = "a001_part_details_";

pub fn part_details_key(pk: i64) -> String {
    format!("{}{}", PART_DETAILS_PREFIX, pk)
}

/// Title of a list tab
pub fn list_label(key: &str) -> Option<&'static str> {
    Some(match key {
        "a001_part" => "Parts",
        "a001_part_category" => "Part Categories",
        "a003_stock_item" => "Stock",
        "a004_stock_location" => "Stock Locations",
        "a005_company" => "Companies",
        "a006_supplier_part" => "Supplier Parts",
        "a007_purchase_order" => "Purchase Orders",
        "a008_sales_order" => "Sales Orders",
        "a009_return_order" => "Return Orders",
        "a010_transfer_order" => "Transfer Orders",
        "a011_build_order" => "Build Orders",
        "a012_project_code" => "Project Codes",
        "sys_users" => "Users",
        _ => return None,
    })
}

/// Title for any tab key; unknown keys are shown as-is
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(pk) = key.strip_prefix(PART_DETAILS_PREFIX) {
        return format!("Part {}", pk);
    }
    list_label(key).unwrap_or(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(tab_label_for_key("a003_stock_item"), "Stock");
        assert_eq!(tab_label_for_key(&part_details_key(12)), "Part 12");
        assert_eq!(tab_label_for_key("whatever"), "whatever");
    }
}
