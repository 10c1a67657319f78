use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::{do_login, use_auth};

/// Trimmed username and password, or the message to show instead of sending them
fn check_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username");
    }
    if password.is_empty() {
        return Err("Enter your password");
    }
    // basic auth splits on the first colon
    if username.contains(':') {
        return Err("Usernames cannot contain ':'");
    }
    Ok((username.to_string(), password.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user, pass) = match username.with_untracked(|u| password.with_untracked(|p| check_credentials(u, p))) {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(Some(msg.to_string()));
                return;
            }
        };

        busy.set(true);
        error.set(None);
        spawn_local(async move {
            // on success AppShell swaps this page out
            if let Err(e) = do_login(user, pass, set_auth_state).await {
                log::warn!("Login failed: {}", e);
                let _ = error.try_set(Some(e));
                let _ = password.try_set(String::new());
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <form class="login-box" on:submit=on_submit>
                <div class="login-box__brand">{icon("stock")} <h1>"Inventory"</h1></div>

                {move || error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

                <label class="form__label" for="login-username">"Username"</label>
                <input
                    id="login-username"
                    class="form__input"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />

                <label class="form__label" for="login-password">"Password"</label>
                <input
                    id="login-password"
                    class="form__input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />

                <button type="submit" class="btn-primary login-box__submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_checked_before_sending() {
        assert_eq!(
            check_credentials("  admin ", "secret"),
            Ok(("admin".to_string(), "secret".to_string()))
        );
        assert_eq!(check_credentials("   ", "secret"), Err("Enter your username"));
        assert_eq!(check_credentials("admin", ""), Err("Enter your password"));
        assert!(check_credentials("ad:min", "secret").is_err());
    }
}
