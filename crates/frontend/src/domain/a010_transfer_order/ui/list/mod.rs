use contracts::enums::TransferOrderStatus;
use leptos::prelude::*;

use crate::shared::components::{date_text, field_text, status_text, Column, PageHeader, RecordList};

#[component]
pub fn TransferOrderList() -> impl IntoView {
    let columns = vec![
        Column::new("reference", "Reference"),
        Column::new("take_from", "Source").render(|r| field_text(r, "take_from_detail.pathstring")),
        Column::new("destination", "Destination")
            .render(|r| field_text(r, "destination_detail.pathstring")),
        Column::new("description", "Description").unsorted(),
        Column::new("status", "Status").render(|r| {
            status_text(r, |code| TransferOrderStatus::from_code(code).map(|s| s.display_name()))
        }),
        Column::new("target_date", "Target Date").render(|r| date_text(r, "target_date")),
    ];

    view! {
        <div class="page">
            <PageHeader title="Transfer Orders".to_string() />
            <RecordList
                table="transferorder"
                endpoint="/api/order/to/"
                columns=columns
                role="transfer_order"
                model="transferorder"
            />
        </div>
    }
}
