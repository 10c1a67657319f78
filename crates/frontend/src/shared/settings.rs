//! Global server settings, turned into the feature flags every builder receives

use contracts::shared::choices::list_records;
use contracts::shared::settings::{FeatureFlags, GlobalSettings, SettingEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::get_value;

pub async fn fetch_global_settings() -> Result<GlobalSettings, String> {
    let body = get_value("/api/settings/global/", &[]).await?;
    let entries = list_records(&body)
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<SettingEntry>(entry).ok())
        .collect();
    Ok(GlobalSettings::from_entries(entries))
}

/// Feature flags shared through context; all flags are off until settings arrive
#[derive(Clone, Copy)]
pub struct FeatureFlagsContext {
    pub flags: RwSignal<FeatureFlags>,
    pub loaded: RwSignal<bool>,
}

impl FeatureFlagsContext {
    pub fn new() -> Self {
        Self {
            flags: RwSignal::new(FeatureFlags::default()),
            loaded: RwSignal::new(false),
        }
    }

    pub fn reload(&self) {
        let flags = self.flags;
        let loaded = self.loaded;
        spawn_local(async move {
            match fetch_global_settings().await {
                Ok(settings) => {
                    let new_flags = FeatureFlags::from_settings(&settings);
                    log::debug!("Feature flags: {:?}", new_flags);
                    flags.set(new_flags);
                }
                Err(e) => log::error!("Failed to load global settings: {}", e),
            }
            loaded.set(true);
        });
    }
}

impl Default for FeatureFlagsContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_feature_flags() -> FeatureFlagsContext {
    use_context::<FeatureFlagsContext>().expect("FeatureFlagsContext not found in context")
}
