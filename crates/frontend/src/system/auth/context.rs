use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore the session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(token) = storage::get_token() {
                // Validate the token by fetching the current user
                match api::get_current_user().await {
                    Ok(user_info) => {
                        set_auth_state.set(AuthState {
                            token: Some(token),
                            user_info: Some(user_info),
                        });
                    }
                    Err(_) => {
                        storage::clear_token();
                    }
                }
            }
        });
    });

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

/// Helper: Perform login and store the session
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password)
        .await
        .map_err(|e| e.to_string())?;

    storage::save_token(&response.token);
    set_auth_state.set(AuthState {
        token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Helper: Perform logout and clear the session
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    api::logout().await;
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
