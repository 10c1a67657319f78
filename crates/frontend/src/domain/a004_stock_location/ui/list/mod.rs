use leptos::prelude::*;

use crate::shared::components::{flag_text, Column, PageHeader, RecordList};

#[component]
pub fn StockLocationList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Name"),
        Column::new("description", "Description").unsorted(),
        Column::new("pathstring", "Path"),
        Column::new("items", "Stock Items"),
        Column::new("structural", "Structural").render(|r| flag_text(r, "structural")),
        Column::new("external", "External").render(|r| flag_text(r, "external")),
    ];

    view! {
        <div class="page">
            <PageHeader title="Stock Locations".to_string() />
            <RecordList
                table="location"
                endpoint="/api/stock/location/"
                columns=columns
                role="stock_location"
                model="stocklocation"
                print_model="stocklocation"
            />
        </div>
    }
}
