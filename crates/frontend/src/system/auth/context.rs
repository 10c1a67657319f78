use contracts::system::auth::{Permission, UserInfo, UserRoles};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub roles: UserRoles,
}

impl AuthState {
    pub fn has(&self, role: &str, permission: Permission) -> bool {
        self.roles.has(role, permission)
    }
}

/// Load user and roles for a token; `None` if the token is rejected
async fn load_session(token: String) -> Option<AuthState> {
    let user_info = match api::get_current_user().await {
        Ok(user) => user,
        Err(e) => {
            log::warn!("Stored token rejected: {}", e);
            return None;
        }
    };
    let roles = api::get_roles().await.unwrap_or_else(|e| {
        log::error!("Failed to load user roles: {}", e);
        UserRoles::default()
    });
    Some(AuthState {
        access_token: Some(token),
        user_info: Some(user_info),
        roles,
    })
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore session from localStorage on mount
    if let Some(token) = storage::get_access_token() {
        spawn_local(async move {
            match load_session(token).await {
                Some(state) => set_auth_state.set(state),
                None => storage::clear_access_token(),
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Log in and publish the new session
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(&username, &password).await?;
    storage::save_access_token(&response.token);

    let state = load_session(response.token)
        .await
        .ok_or_else(|| "Token was not accepted".to_string())?;
    set_auth_state.set(state);
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_access_token();
    set_auth_state.set(AuthState::default());
}
