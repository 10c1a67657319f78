use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query string of the app: `?active=<tab key>&panel=<panel name>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<String>,
}

impl UrlState {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn to_search(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(query) if !query.is_empty() => format!("?{}", query),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    /// Selected panel of the active tab, mirrored in the URL
    pub panel: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            panel: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Open the tab named in the URL, then keep the URL in sync with the active tab
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let url = UrlState::parse(&search);
        if let Some(active_key) = url.active {
            let title = super::tabs::tab_label_for_key(&active_key);
            self.open_tab(&active_key, &title);
            self.panel.set(url.panel);
        }

        let this = *self;
        Effect::new(move |_| {
            let state = UrlState {
                active: this.active.get(),
                panel: this.panel.get(),
            };
            let new_search = state.to_search();
            let Some(w) = window() else {
                return;
            };
            if w.location().search().ok().as_deref() == Some(new_search.as_str()) {
                return;
            }
            let url = if new_search.is_empty() {
                w.location().pathname().unwrap_or_else(|_| "/".to_string())
            } else {
                new_search
            };
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open_tab: '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        if self.active.with_untracked(|a| a.as_deref() != Some(key)) {
            self.panel.set(None);
            self.active.set(Some(key.to_string()));
        }
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.panel.set(None);
            self.active.set(next_active);
        }
    }

    /// Record the panel chosen inside tab `key`; ignored for background tabs
    pub fn set_panel(&self, key: &str, panel: &str) {
        if self.active.with_untracked(|a| a.as_deref() == Some(key)) {
            self.panel.set(Some(panel.to_string()));
        }
    }

    /// Panel requested by the URL for tab `key`
    pub fn url_panel(&self, key: &str) -> Option<String> {
        if self.active.with_untracked(|a| a.as_deref() == Some(key)) {
            self.panel.get_untracked()
        } else {
            None
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_state_round_trip() {
        let state = UrlState::parse("?active=a001_part_details_12&panel=stock");
        assert_eq!(state.active.as_deref(), Some("a001_part_details_12"));
        assert_eq!(state.panel.as_deref(), Some("stock"));
        assert_eq!(state.to_search(), "?active=a001_part_details_12&panel=stock");
    }

    #[test]
    fn empty_url_state() {
        assert_eq!(UrlState::parse(""), UrlState::default());
        assert_eq!(UrlState::default().to_search(), "");
        let only_tab = UrlState {
            active: Some("a003_stock_item".to_string()),
            panel: None,
        };
        assert_eq!(only_tab.to_search(), "?active=a003_stock_item");
    }
}
