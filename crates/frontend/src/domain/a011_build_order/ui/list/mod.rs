use contracts::enums::BuildStatus;
use leptos::prelude::*;

use crate::shared::components::{date_text, field_text, status_text, Column, PageHeader, RecordList};

pub fn build_order_columns() -> Vec<Column> {
    vec![
        Column::new("reference", "Reference"),
        Column::new("part", "Part").render(|r| field_text(r, "part_detail.full_name")),
        Column::new("title", "Description").unsorted(),
        Column::new("quantity", "Quantity"),
        Column::new("completed", "Completed"),
        Column::new("status", "Status")
            .render(|r| status_text(r, |code| BuildStatus::from_code(code).map(|s| s.display_name()))),
        Column::new("target_date", "Target Date").render(|r| date_text(r, "target_date")),
    ]
}

#[component]
pub fn BuildOrderList() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Build Orders".to_string() />
            <RecordList
                table="build"
                endpoint="/api/build/"
                columns=build_order_columns()
                role="build"
                model="build"
                print_model="build"
            />
        </div>
    }
}
