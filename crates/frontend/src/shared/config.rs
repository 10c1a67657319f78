use contracts::shared::config::{AppConfig, DEFAULT_CONFIG};
use once_cell::sync::Lazy;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match AppConfig::from_toml(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Embedded configuration rejected, using defaults: {}", e);
        AppConfig::default()
    }
});

pub fn app_config() -> &'static AppConfig {
    &CONFIG
}
