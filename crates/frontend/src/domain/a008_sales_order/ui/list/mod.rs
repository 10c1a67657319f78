use contracts::enums::SalesOrderStatus;
use leptos::prelude::*;

use crate::shared::components::{date_text, field_text, status_text, Column, PageHeader, RecordList};

pub fn sales_order_columns() -> Vec<Column> {
    vec![
        Column::new("reference", "Reference"),
        Column::new("customer", "Customer").render(|r| field_text(r, "customer_detail.name")),
        Column::new("customer_reference", "Customer Reference"),
        Column::new("description", "Description").unsorted(),
        Column::new("status", "Status").render(|r| {
            status_text(r, |code| SalesOrderStatus::from_code(code).map(|s| s.display_name()))
        }),
        Column::new("target_date", "Target Date").render(|r| date_text(r, "target_date")),
        Column::new("shipment_date", "Shipped").render(|r| date_text(r, "shipment_date")),
    ]
}

#[component]
pub fn SalesOrderList() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Sales Orders".to_string() />
            <RecordList
                table="salesorder"
                endpoint="/api/order/so/"
                columns=sales_order_columns()
                role="sales_order"
                model="salesorder"
                print_model="salesorder"
            />
        </div>
    }
}
