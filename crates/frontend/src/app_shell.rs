//! Root components
//!
//! - `AppShell`: auth gate (login page or main layout)
//! - `MainLayout`: sidebar, tab bar and open tabs

use leptos::prelude::*;

use crate::layout::global_context::{use_app_context, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::{tab_label_for_key, TabBar, TabPage};
use crate::layout::Shell;
use crate::shared::settings::use_feature_flags;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

const DEFAULT_TAB: &str = "a003_stock_item";

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();
    use_feature_flags().reload();

    // restores the tab named in the URL, then mirrors the active tab into it
    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(Vec::is_empty) {
        tabs_store.open_tab(DEFAULT_TAB, &tab_label_for_key(DEFAULT_TAB));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|a| a.access_token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
