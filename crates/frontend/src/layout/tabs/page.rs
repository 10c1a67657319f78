//! Wrapper of one open tab: content from the registry, hidden while inactive

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key_for_active.as_str());

    log::debug!("TabPage created: '{}'", tab_key);
    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || log::debug!("TabPage destroyed: '{}'", key_for_cleanup));

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}

/// Header strip with one button per open tab
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = crate::layout::global_context::use_app_context();

    view! {
        <div class="tabs__bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| {
                    let key = StoredValue::new(tab.key.clone());
                    let is_active = move || {
                        tabs_store.active.get().as_deref() == Some(key.get_value().as_str())
                    };
                    view! {
                        <div
                            class="tabs__tab"
                            class:tabs__tab--active=is_active
                            on:click=move |_| tabs_store.activate_tab(&key.get_value())
                        >
                            <span>{move || {
                                tabs_store.opened.with(|tabs| {
                                    tabs.iter()
                                        .find(|t| key.with_value(|k| *k == t.key))
                                        .map(|t| t.title.clone())
                                        .unwrap_or_default()
                                })
                            }}</span>
                            <button
                                class="tabs__close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    tabs_store.close_tab(&key.get_value());
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
