use leptos::prelude::*;

use crate::shared::components::{field_text, Column, PageHeader, RecordList};

pub fn supplier_part_columns() -> Vec<Column> {
    vec![
        Column::new("SKU", "SKU"),
        Column::new("part", "Part").render(|r| field_text(r, "part_detail.full_name")),
        Column::new("supplier", "Supplier").render(|r| field_text(r, "supplier_detail.name")),
        Column::new("MPN", "MPN").render(|r| field_text(r, "manufacturer_part_detail.MPN")),
        Column::new("pack_quantity", "Pack").unsorted(),
        Column::new("in_stock", "Supplier Stock"),
    ]
}

#[component]
pub fn SupplierPartList() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Supplier Parts".to_string() />
            <RecordList
                table="supplierpart"
                endpoint="/api/company/part/"
                columns=supplier_part_columns()
                role="purchase_order"
                model="supplierpart"
            />
        </div>
    }
}
