use leptos::prelude::*;
use serde_json::Value;

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::part_details_key;
use crate::shared::components::{field_text, Column, PageHeader, RecordList};

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Part").render(|r| field_text(r, "full_name")),
        Column::new("IPN", "IPN"),
        Column::new("description", "Description").unsorted(),
        Column::new("category", "Category").render(|r| field_text(r, "category_detail.pathstring")),
        Column::new("in_stock", "Stock"),
        Column::new("units", "Units").unsorted(),
    ]
}

#[component]
pub fn PartList() -> impl IntoView {
    let ctx = use_app_context();

    // rows open the part page instead of the edit dialog
    let open_part = Callback::new(move |record: Value| {
        let Some(pk) = record.get("pk").and_then(Value::as_i64) else {
            return;
        };
        let title = field_text(&record, "full_name");
        ctx.open_tab(&part_details_key(pk), &title);
    });

    view! {
        <div class="page">
            <PageHeader title="Parts".to_string() />
            <RecordList
                table="part"
                endpoint="/api/part/"
                columns=columns()
                role="part"
                model="part"
                print_model="part"
                on_open=open_part
            />
        </div>
    }
}
