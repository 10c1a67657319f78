//! Persisted UI state: per-table view settings and last used panel per page.
//!
//! The whole state is one JSON document stored under a single storage key.
//! It is read from the backend on first access and written back on every
//! change; reads are served from memory.

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::shared::config::AppConfig;

/// Durable key/value storage (browser localStorage in the UI)
pub trait StorageBackend {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// In-memory backend; clones share the same items
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStatus {
    pub column: String,
    pub ascending: bool,
}

impl SortStatus {
    /// Value of the `ordering` query parameter
    pub fn ordering(&self) -> String {
        if self.ascending {
            self.column.clone()
        } else {
            format!("-{}", self.column)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    pub page_size: Option<usize>,
    pub sorting: Option<SortStatus>,
    pub hidden_columns: Vec<String>,
    pub column_names: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub tables: BTreeMap<String, TableState>,
    pub pages: BTreeMap<String, String>,
}

pub struct UiStateStore<S: StorageBackend> {
    backend: S,
    storage_key: String,
    default_page_size: usize,
    state: OnceCell<RefCell<UiState>>,
}

impl<S: StorageBackend> UiStateStore<S> {
    pub fn new(backend: S, storage_key: &str, default_page_size: usize) -> Self {
        Self {
            backend,
            storage_key: storage_key.to_string(),
            default_page_size,
            state: OnceCell::new(),
        }
    }

    pub fn from_config(backend: S, config: &AppConfig) -> Self {
        Self::new(
            backend,
            &config.storage.ui_state_key,
            config.tables.default_page_size,
        )
    }

    fn state(&self) -> &RefCell<UiState> {
        self.state.get_or_init(|| {
            let loaded = self
                .backend
                .load(&self.storage_key)
                .and_then(|raw| match serde_json::from_str::<UiState>(&raw) {
                    Ok(state) => Some(state),
                    Err(e) => {
                        log::warn!("Discarding unreadable UI state '{}': {}", self.storage_key, e);
                        None
                    }
                })
                .unwrap_or_default();
            RefCell::new(loaded)
        })
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&*self.state().borrow()) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize UI state: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.save(&self.storage_key, &json) {
            log::error!("Failed to persist UI state: {}", e);
        }
    }

    fn read_table<R>(&self, table: &str, f: impl FnOnce(&TableState) -> R) -> Option<R> {
        self.state().borrow().tables.get(table).map(f)
    }

    fn update_table(&self, table: &str, f: impl FnOnce(&mut TableState)) {
        {
            let mut state = self.state().borrow_mut();
            f(state.tables.entry(table.to_string()).or_default());
        }
        self.persist();
    }

    pub fn page_size(&self, table: &str) -> usize {
        self.read_table(table, |t| t.page_size)
            .flatten()
            .unwrap_or(self.default_page_size)
    }

    pub fn set_page_size(&self, table: &str, page_size: usize) {
        self.update_table(table, |t| t.page_size = Some(page_size));
    }

    pub fn sorting(&self, table: &str) -> Option<SortStatus> {
        self.read_table(table, |t| t.sorting.clone()).flatten()
    }

    pub fn set_sorting(&self, table: &str, sorting: Option<SortStatus>) {
        self.update_table(table, |t| t.sorting = sorting);
    }

    pub fn hidden_columns(&self, table: &str) -> Vec<String> {
        self.read_table(table, |t| t.hidden_columns.clone())
            .unwrap_or_default()
    }

    /// Flip a column's visibility; returns true when the column is now hidden
    pub fn toggle_column(&self, table: &str, column: &str) -> bool {
        let mut hidden = false;
        self.update_table(table, |t| {
            if let Some(pos) = t.hidden_columns.iter().position(|c| c == column) {
                t.hidden_columns.remove(pos);
            } else {
                t.hidden_columns.push(column.to_string());
                hidden = true;
            }
        });
        hidden
    }

    pub fn column_names(&self, table: &str) -> BTreeMap<String, String> {
        self.read_table(table, |t| t.column_names.clone())
            .unwrap_or_default()
    }

    /// Override a column's display name; `None` restores the default
    pub fn set_column_name(&self, table: &str, column: &str, name: Option<&str>) {
        self.update_table(table, |t| match name {
            Some(name) => {
                t.column_names.insert(column.to_string(), name.to_string());
            }
            None => {
                t.column_names.remove(column);
            }
        });
    }

    pub fn last_panel(&self, page: &str) -> Option<String> {
        self.state().borrow().pages.get(page).cloned()
    }

    pub fn set_last_panel(&self, page: &str, panel: &str) {
        self.state()
            .borrow_mut()
            .pages
            .insert(page.to_string(), panel.to_string());
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(storage: &MemoryStorage) -> UiStateStore<MemoryStorage> {
        UiStateStore::new(storage.clone(), "ui-state", 25)
    }

    #[test]
    fn defaults_without_prior_state() {
        let store = store(&MemoryStorage::new());
        assert_eq!(store.page_size("parts"), 25);
        assert_eq!(store.sorting("parts"), None);
        assert!(store.hidden_columns("parts").is_empty());
        assert!(store.column_names("parts").is_empty());
        assert_eq!(store.last_panel("part-detail"), None);
    }

    #[test]
    fn page_size_round_trip_through_storage() {
        let storage = MemoryStorage::new();
        store(&storage).set_page_size("parts", 100);

        let reloaded = store(&storage);
        assert_eq!(reloaded.page_size("parts"), 100);
        assert_eq!(reloaded.page_size("stock"), 25);
    }

    #[test]
    fn writes_are_visible_immediately() {
        let store = store(&MemoryStorage::new());
        store.set_sorting(
            "stock",
            Some(SortStatus {
                column: "quantity".to_string(),
                ascending: false,
            }),
        );
        assert_eq!(store.sorting("stock").unwrap().ordering(), "-quantity");

        assert!(store.toggle_column("stock", "batch"));
        assert_eq!(store.hidden_columns("stock"), vec!["batch"]);
        assert!(!store.toggle_column("stock", "batch"));
        assert!(store.hidden_columns("stock").is_empty());
    }

    #[test]
    fn column_name_overrides() {
        let storage = MemoryStorage::new();
        let first = store(&storage);
        first.set_column_name("parts", "IPN", Some("Internal Number"));
        first.set_column_name("parts", "name", Some("Title"));
        first.set_column_name("parts", "name", None);

        let names = store(&storage).column_names("parts");
        assert_eq!(names.len(), 1);
        assert_eq!(names["IPN"], "Internal Number");
    }

    #[test]
    fn last_panel_persists() {
        let storage = MemoryStorage::new();
        store(&storage).set_last_panel("part-detail", "stock");
        assert_eq!(
            store(&storage).last_panel("part-detail"),
            Some("stock".to_string())
        );
    }

    #[test]
    fn corrupt_state_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        storage.save("ui-state", "{not json").unwrap();
        let store = store(&storage);
        assert_eq!(store.page_size("parts"), 25);

        store.set_page_size("parts", 10);
        assert_eq!(
            UiStateStore::new(storage.clone(), "ui-state", 25).page_size("parts"),
            10
        );
    }

    #[test]
    fn last_write_wins_on_same_key() {
        let storage = MemoryStorage::new();
        let a = store(&storage);
        let b = store(&storage);
        a.set_page_size("parts", 50);
        b.set_page_size("parts", 10);
        assert_eq!(store(&storage).page_size("parts"), 10);
    }
}
