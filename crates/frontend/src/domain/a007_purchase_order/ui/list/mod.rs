use contracts::enums::PurchaseOrderStatus;
use leptos::prelude::*;

use crate::shared::components::{date_text, field_text, status_text, Column, PageHeader, RecordList};

pub fn purchase_order_columns() -> Vec<Column> {
    vec![
        Column::new("reference", "Reference"),
        Column::new("supplier", "Supplier").render(|r| field_text(r, "supplier_detail.name")),
        Column::new("supplier_reference", "Supplier Reference"),
        Column::new("description", "Description").unsorted(),
        Column::new("status", "Status").render(|r| {
            status_text(r, |code| PurchaseOrderStatus::from_code(code).map(|s| s.display_name()))
        }),
        Column::new("target_date", "Target Date").render(|r| date_text(r, "target_date")),
        Column::new("total_price", "Total").unsorted(),
    ]
}

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Purchase Orders".to_string() />
            <RecordList
                table="purchaseorder"
                endpoint="/api/order/po/"
                columns=purchase_order_columns()
                role="purchase_order"
                model="purchaseorder"
                print_model="purchaseorder"
            />
        </div>
    }
}
