use contracts::system::users::User;
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::components::{flag_text, Column, PageHeader, RecordList};

fn display_name(record: &Value) -> String {
    serde_json::from_value::<User>(record.clone())
        .map(|user| user.full_name())
        .unwrap_or_default()
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let columns = vec![
        Column::new("username", "Username"),
        Column::new("name", "Name").unsorted().render(display_name),
        Column::new("email", "Email"),
        Column::new("is_staff", "Staff").render(|r| flag_text(r, "is_staff")),
        Column::new("is_active", "Active").render(|r| flag_text(r, "is_active")),
    ];

    view! {
        <div class="page">
            <PageHeader title="Users".to_string() />
            <RecordList table="users" endpoint="/api/user/" columns=columns />
        </div>
    }
}
