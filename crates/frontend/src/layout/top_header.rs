//! Top bar: sidebar toggle, title, signed-in user and logout

use leptos::prelude::*;

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state.with(|state| {
            state
                .user_info
                .as_ref()
                .map(|u| u.username.clone())
                .unwrap_or_else(|| "Guest".to_string())
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Inventory"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                </div>
                <button class="top-header__icon-btn" on:click=move |_| do_logout(set_auth_state) title="Log out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
