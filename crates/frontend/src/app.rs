use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::settings::FeatureFlagsContext;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // tab store and feature flags live for the whole app
    provide_context(AppGlobalContext::new());
    provide_context(FeatureFlagsContext::new());

    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}
