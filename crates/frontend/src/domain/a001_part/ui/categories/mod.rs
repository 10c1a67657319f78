use leptos::prelude::*;

use crate::shared::components::{Column, PageHeader, RecordList};

#[component]
pub fn PartCategoryList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Name"),
        Column::new("description", "Description").unsorted(),
        Column::new("pathstring", "Path"),
        Column::new("part_count", "Parts"),
    ];

    view! {
        <div class="page">
            <PageHeader title="Part Categories".to_string() />
            <RecordList
                table="category"
                endpoint="/api/part/category/"
                columns=columns
                role="part_category"
            />
        </div>
    }
}
