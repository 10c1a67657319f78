use contracts::enums::StockStatus;
use leptos::prelude::*;

use crate::shared::components::{date_text, field_text, status_text, Column, PageHeader, RecordList};

/// Stock table columns, shared with the stock panel of the part page
pub fn stock_columns() -> Vec<Column> {
    vec![
        Column::new("part", "Part").render(|r| field_text(r, "part_detail.full_name")),
        Column::new("quantity", "Quantity"),
        Column::new("serial", "Serial"),
        Column::new("batch", "Batch"),
        Column::new("status", "Status")
            .render(|r| status_text(r, |code| StockStatus::from_code(code).map(|s| s.display_name()))),
        Column::new("location", "Location").render(|r| field_text(r, "location_detail.pathstring")),
        Column::new("expiry_date", "Expiry").render(|r| date_text(r, "expiry_date")),
        Column::new("purchase_price", "Purchase Price").unsorted(),
    ]
}

#[component]
pub fn StockItemList() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Stock".to_string() subtitle="Stock items in all locations".to_string() />
            <RecordList
                table="stock"
                endpoint="/api/stock/"
                columns=stock_columns()
                role="stock"
                model="stockitem"
                print_model="stockitem"
            />
        </div>
    }
}
