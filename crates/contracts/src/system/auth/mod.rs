use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /api/user/token/` (basic auth)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response of `GET /api/user/me/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub pk: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Permission verbs of a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    View,
    Add,
    Change,
    Delete,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
        }
    }
}

/// Response of `GET /api/user/roles/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoles {
    /// role name ("part", "stock", "purchase_order", ...) -> granted verbs
    #[serde(default)]
    pub roles: BTreeMap<String, Option<Vec<String>>>,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

impl UserRoles {
    /// Superusers hold every permission; a null role grants nothing
    pub fn has(&self, role: &str, permission: Permission) -> bool {
        if self.is_superuser {
            return true;
        }
        self.roles
            .get(role)
            .and_then(|perms| perms.as_ref())
            .map(|perms| perms.iter().any(|p| p == permission.as_str()))
            .unwrap_or(false)
    }

    pub fn can_view(&self, role: &str) -> bool {
        self.has(role, Permission::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_lookup() {
        let roles: UserRoles = serde_json::from_value(json!({
            "roles": {
                "part": ["view", "change"],
                "stock": null
            },
            "is_staff": true
        }))
        .unwrap();

        assert!(roles.can_view("part"));
        assert!(roles.has("part", Permission::Change));
        assert!(!roles.has("part", Permission::Delete));
        assert!(!roles.can_view("stock"));
        assert!(!roles.can_view("build"));
    }

    #[test]
    fn superuser_has_everything() {
        let roles = UserRoles {
            is_superuser: true,
            ..UserRoles::default()
        };
        assert!(roles.has("purchase_order", Permission::Delete));
    }
}
