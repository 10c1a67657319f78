//! Lazy loading of remote choice lists for filters and form fields

use contracts::shared::choices::{ChoiceCache, ChoiceState, RemoteChoices};
use contracts::shared::requests::RequestTracker;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::shared::api::get_value;

const LOAD_KEY: &str = "choices";

/// Fetch the raw list behind a choice source (all pages up to the API limit)
pub async fn fetch_choice_records(source: RemoteChoices) -> Result<Value, String> {
    let mut params = source.params.clone();
    params.push(("limit".to_string(), "1000".to_string()));
    get_value(&source.endpoint, &params).await
}

/// Loader bound to one widget: fetches on first [`open`](Self::open), then serves the cache
#[derive(Clone, Copy)]
pub struct RemoteChoiceLoader {
    pub state: RwSignal<ChoiceState>,
    cache: StoredValue<ChoiceCache>,
    tracker: StoredValue<RequestTracker>,
}

impl RemoteChoiceLoader {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ChoiceState::NotLoaded),
            cache: StoredValue::new(ChoiceCache::new()),
            tracker: StoredValue::new(RequestTracker::new()),
        }
    }

    pub fn open(&self, source: RemoteChoices) {
        if let Some(choices) = self.cache.with_value(|c| c.cached().map(<[_]>::to_vec)) {
            self.state.set(ChoiceState::Loaded(choices));
            return;
        }
        if self.state.get_untracked() == ChoiceState::Loading {
            return;
        }

        self.state.set(ChoiceState::Loading);
        let Some(ticket) = self.tracker.try_update_value(|t| t.begin(LOAD_KEY)) else {
            return;
        };
        let state = self.state;
        let cache = self.cache;
        let tracker = self.tracker;
        spawn_local(async move {
            let mut loaded = ChoiceCache::new();
            let choices = loaded.get_or_load(&source, fetch_choice_records).await;
            // widget may be gone, or its source changed meanwhile
            if !tracker.try_update_value(|t| t.complete(&ticket)).unwrap_or(false) {
                return;
            }
            if loaded.cached().is_some() {
                cache.update_value(|c| c.store(choices.clone()));
            }
            state.set(ChoiceState::Loaded(choices));
        });
    }

    /// Forget the cached list; the next [`open`](Self::open) fetches again
    pub fn reset(&self) {
        self.tracker.update_value(|t| t.cancel_all());
        self.cache.set_value(ChoiceCache::new());
        self.state.set(ChoiceState::NotLoaded);
    }
}

impl Default for RemoteChoiceLoader {
    fn default() -> Self {
        Self::new()
    }
}
