//! API token kept across reloads

use contracts::shared::ui_state::StorageBackend;

use crate::shared::config::app_config;
use crate::shared::storage::LocalStorage;

fn token_key() -> &'static str {
    &app_config().storage.token_key
}

pub fn save_access_token(token: &str) {
    if let Err(e) = LocalStorage.save(token_key(), token) {
        log::warn!("API token not persisted, session ends on reload: {}", e);
    }
}

pub fn get_access_token() -> Option<String> {
    LocalStorage.load(token_key()).filter(|token| !token.is_empty())
}

pub fn clear_access_token() {
    LocalStorage.remove(token_key());
}
