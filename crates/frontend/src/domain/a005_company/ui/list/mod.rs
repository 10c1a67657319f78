use leptos::prelude::*;

use crate::shared::components::{flag_text, Column, PageHeader, RecordList};

#[component]
pub fn CompanyList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Company"),
        Column::new("description", "Description").unsorted(),
        Column::new("website", "Website").unsorted(),
        Column::new("is_customer", "Customer").render(|r| flag_text(r, "is_customer")),
        Column::new("is_supplier", "Supplier").render(|r| flag_text(r, "is_supplier")),
        Column::new("is_manufacturer", "Manufacturer").render(|r| flag_text(r, "is_manufacturer")),
        Column::new("currency", "Currency").unsorted(),
    ];

    view! {
        <div class="page">
            <PageHeader title="Companies".to_string() />
            <RecordList table="company" endpoint="/api/company/" columns=columns model="company" />
        </div>
    }
}
