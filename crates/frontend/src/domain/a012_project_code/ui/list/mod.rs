use leptos::prelude::*;

use crate::shared::components::{field_text, Column, PageHeader, RecordList};

#[component]
pub fn ProjectCodeList() -> impl IntoView {
    let columns = vec![
        Column::new("code", "Project Code"),
        Column::new("description", "Description").unsorted(),
        Column::new("responsible", "Responsible").render(|r| field_text(r, "responsible_detail.name")),
    ];

    view! {
        <div class="page">
            <PageHeader title="Project Codes".to_string() />
            <RecordList
                table="projectcode"
                endpoint="/api/project-code/"
                columns=columns
                model="projectcode"
            />
        </div>
    }
}
