//! Username/password login.

use api::AuthApi;
use dioxus::prelude::*;
use store::{Session, SessionIdentity};

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, SuccessBanner};
use crate::connection::ConnectionStatus;
use crate::password_reset::PasswordResetDialog;
use crate::session::{use_api, use_session};

const LOGIN_SUCCESS: &str = "logged in, redirecting";
const NO_TOKEN: &str = "login failed: no access token in response";

/// State of the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub message: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub navigate: bool,
}

impl LoginState {
    /// Post the credentials. On success the session is bootstrapped and
    /// navigation requested; on failure the status-specific message is shown
    /// and both input fields are cleared.
    pub async fn submit<A: AuthApi>(&mut self, api: &A, session: &Session) {
        self.error = None;
        self.message = None;
        let username = self.username.trim().to_string();

        match api.login(&username, &self.password).await {
            Ok(response) => match response.access {
                Some(token) => {
                    let identity = SessionIdentity {
                        user_id: response
                            .user_id
                            .map(|id| id.to_string())
                            .unwrap_or_default(),
                        username: response.username.unwrap_or(username),
                        user_type: response.user_type,
                    };
                    session.persist(&identity, Some(&token));
                    self.message = Some(LOGIN_SUCCESS.to_string());
                    self.navigate = true;
                }
                None => {
                    self.error = Some(NO_TOKEN.to_string());
                    self.username.clear();
                    self.password.clear();
                }
            },
            Err(e) => {
                tracing::error!("login failed: {e}");
                self.error = Some(e.login_message());
                self.username.clear();
                self.password.clear();
            }
        }
        self.loading = false;
    }
}

/// Login form with a forgot-password entry point and a reachability badge.
#[component]
pub fn LoginForm() -> Element {
    let api = use_api();
    let session = use_session();
    let mut state = use_signal(LoginState::default);
    let mut show_reset = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            state.write().loading = true;
            let mut s = state();
            s.submit(&api, &session).await;
            state.set(s);
            if state().navigate {
                crate::nav::redirect_after_delay("/").await;
            }
        });
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: on_submit,

            if let Some(err) = state().error {
                ErrorBanner { message: err }
            }
            if let Some(msg) = state().message {
                SuccessBanner { message: msg }
            }

            Input {
                class: "w-full",
                placeholder: "Username",
                value: state().username,
                oninput: move |evt: FormEvent| state.write().username = evt.value(),
            }
            Input {
                class: "w-full",
                r#type: "password",
                placeholder: "Password",
                value: state().password,
                oninput: move |evt: FormEvent| state.write().password = evt.value(),
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "w-full",
                r#type: "submit",
                disabled: state().loading,
                if state().loading { "Signing in..." } else { "Sign in" }
            }

            button {
                class: "link-button",
                r#type: "button",
                onclick: move |_| show_reset.set(true),
                "Forgot password?"
            }

            ConnectionStatus {}
        }

        if show_reset() {
            PasswordResetDialog {
                on_close: move |_| show_reset.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, MockApi};
    use api::{ApiError, LoginResponse};
    use std::sync::Arc;
    use store::{KeyValueStore, MemoryStore};

    fn state() -> LoginState {
        LoginState {
            username: "asha".to_string(),
            password: "secret1".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_login_success_bootstraps_session() {
        let mut api = MockApi::default();
        api.login = Ok(LoginResponse {
            access: Some("tok-login".to_string()),
            user_id: Some(42),
            username: Some("asha".to_string()),
            user_type: Some("citizen".to_string()),
        });
        let backend = MemoryStore::new();
        let session = Session::new(Arc::new(backend.clone()));

        let mut s = state();
        s.submit(&api, &session).await;

        assert!(s.navigate);
        assert_eq!(s.message.as_deref(), Some(LOGIN_SUCCESS));
        // Fields are kept on success; navigation follows.
        assert_eq!(s.username, "asha");
        assert_eq!(session.token(), Some("tok-login".to_string()));
        assert_eq!(backend.get("user_id"), Some("42".to_string()));
        assert_eq!(backend.get("isAuthenticated"), Some("true".to_string()));
        assert_eq!(
            api.calls(),
            vec![Call::Login("asha".to_string(), "secret1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_login_401_clears_fields_with_exact_message() {
        let mut api = MockApi::default();
        api.login = Err(ApiError::Status {
            status: 401,
            body: None,
        });
        let session = Session::new(Arc::new(MemoryStore::new()));

        let mut s = LoginState {
            username: "bad".to_string(),
            password: "wrong".to_string(),
            ..Default::default()
        };
        s.submit(&api, &session).await;

        assert_eq!(s.error.as_deref(), Some("invalid username or password"));
        assert!(s.username.is_empty());
        assert!(s.password.is_empty());
        assert!(!s.navigate);
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn test_login_network_failure_gives_connectivity_guidance() {
        let mut api = MockApi::default();
        api.login = Err(ApiError::Network("connection refused".to_string()));
        let session = Session::new(Arc::new(MemoryStore::new()));

        let mut s = state();
        s.submit(&api, &session).await;

        assert_eq!(s.error.as_deref(), Some(api::error::OFFLINE_MESSAGE));
        assert!(s.username.is_empty());
    }

    #[tokio::test]
    async fn test_login_without_token_is_an_error() {
        let api = MockApi::default();
        let session = Session::new(Arc::new(MemoryStore::new()));

        let mut s = state();
        s.submit(&api, &session).await;

        assert_eq!(s.error.as_deref(), Some(NO_TOKEN));
        assert!(!s.navigate);
    }
}
