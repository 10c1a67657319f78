use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub tables: TablesConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix of every REST path, e.g. "/api"
    pub base_path: String,
}

impl ApiConfig {
    /// Rewrite an `/api/...` endpoint onto the configured prefix
    pub fn resolve(&self, path: &str) -> String {
        let prefix = self.base_path.trim_end_matches('/');
        match path.strip_prefix("/api") {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("{prefix}{rest}"),
            _ => path.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TablesConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// localStorage key holding the persisted UI state blob
    pub ui_state_key: String,
    /// localStorage key of the API token
    pub token_key: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_path = "/api"

[tables]
default_page_size = 25
page_size_options = [10, 25, 50, 100, 250]

[storage]
ui_state_key = "inventory-ui-state"
token_key = "inventory-api-token"
"#;

impl AppConfig {
    /// Parse a TOML document and check it for obviously broken values
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.tables.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "tables.default_page_size must be positive".to_string(),
            ));
        }
        for (name, key) in [
            ("storage.ui_state_key", &config.storage.ui_state_key),
            ("storage.token_key", &config.storage.token_key),
        ] {
            if key.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        if config.storage.ui_state_key == config.storage.token_key {
            return Err(ConfigError::Invalid(
                "storage.ui_state_key and storage.token_key must differ".to_string(),
            ));
        }
        Ok(config)
    }
}

impl Default for AppConfig {
    /// Same values as DEFAULT_CONFIG
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_path: "/api".to_string(),
            },
            tables: TablesConfig {
                default_page_size: 25,
                page_size_options: vec![10, 25, 50, 100, 250],
            },
            storage: StorageConfig {
                ui_state_key: "inventory-ui-state".to_string(),
                token_key: "inventory-api-token".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.tables.default_page_size, 25);
        assert_eq!(config.storage.ui_state_key, "inventory-ui-state");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let broken = DEFAULT_CONFIG.replace("default_page_size = 25", "default_page_size = 0");
        assert!(matches!(
            AppConfig::from_toml(&broken),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_storage_keys_must_differ() {
        let clash = DEFAULT_CONFIG.replace("inventory-api-token", "inventory-ui-state");
        assert!(matches!(
            AppConfig::from_toml(&clash),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_resolve_rewrites_api_prefix() {
        let api = ApiConfig {
            base_path: "/inventree/api/".to_string(),
        };
        assert_eq!(api.resolve("/api/stock/"), "/inventree/api/stock/");
        assert_eq!(api.resolve("/apiary/"), "/apiary/");
        assert_eq!(AppConfig::default().api.resolve("/api/part/1/"), "/api/part/1/");
    }

    #[test]
    fn test_malformed_toml_rejected() {
        assert!(matches!(
            AppConfig::from_toml("[api"),
            Err(ConfigError::Parse(_))
        ));
    }
}
