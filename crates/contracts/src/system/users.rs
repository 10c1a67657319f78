use serde::{Deserialize, Serialize};

use crate::shared::table_filters::TableFilter;

/// Row of `GET /api/user/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub pk: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }
}

pub fn user_filters() -> Vec<TableFilter> {
    vec![
        TableFilter::boolean("is_active", "Active").description("Show active users"),
        TableFilter::boolean("is_staff", "Staff").description("Show staff users"),
        TableFilter::boolean("is_superuser", "Superuser").description("Show superusers"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_name_falls_back_to_username() {
        let user: User = serde_json::from_value(json!({"pk": 1, "username": "admin"})).unwrap();
        assert_eq!(user.full_name(), "admin");

        let user: User = serde_json::from_value(
            json!({"pk": 2, "username": "al", "first_name": "Ada", "last_name": "Lovelace"}),
        )
        .unwrap();
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
