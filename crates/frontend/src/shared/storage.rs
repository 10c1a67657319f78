//! Browser-local persistence of UI state

use contracts::shared::ui_state::{StorageBackend, UiStateStore};
use web_sys::window;

use crate::shared::config::app_config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// `localStorage` as a [`StorageBackend`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl StorageBackend for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage write failed: {:?}", e))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

thread_local! {
    static UI_STATE: UiStateStore<LocalStorage> = UiStateStore::from_config(LocalStorage, app_config());
}

/// Run `f` against the process-wide UI state store
pub fn with_ui_state<R>(f: impl FnOnce(&UiStateStore<LocalStorage>) -> R) -> R {
    UI_STATE.with(f)
}
