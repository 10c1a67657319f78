use contracts::enums::ReturnOrderStatus;
use leptos::prelude::*;

use crate::shared::components::{date_text, field_text, status_text, Column, PageHeader, RecordList};

#[component]
pub fn ReturnOrderList() -> impl IntoView {
    let columns = vec![
        Column::new("reference", "Reference"),
        Column::new("customer", "Customer").render(|r| field_text(r, "customer_detail.name")),
        Column::new("customer_reference", "Customer Reference"),
        Column::new("description", "Description").unsorted(),
        Column::new("status", "Status").render(|r| {
            status_text(r, |code| ReturnOrderStatus::from_code(code).map(|s| s.display_name()))
        }),
        Column::new("target_date", "Target Date").render(|r| date_text(r, "target_date")),
    ];

    view! {
        <div class="page">
            <PageHeader title="Return Orders".to_string() />
            <RecordList
                table="returnorder"
                endpoint="/api/order/ro/"
                columns=columns
                role="return_order"
                model="returnorder"
                print_model="returnorder"
            />
        </div>
    }
}
