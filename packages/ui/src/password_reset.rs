//! Password reset: request an OTP by email, then set a new password with it.
//! Presented as a dialog on the login view.

use api::AuthApi;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, SuccessBanner};
use crate::modal::ModalOverlay;
use crate::session::use_api;
use crate::signup::sanitize_otp;

const EMAIL_REQUIRED: &str = "email required";
const OTP_REQUIRED: &str = "OTP required";
const PASSWORD_TOO_SHORT: &str = "password must be at least 6 characters";
const CODE_SENT: &str = "OTP sent to your email";
const REQUEST_FALLBACK: &str = "could not send reset code";
const RESET_FALLBACK: &str = "password reset failed";
const RESET_DONE: &str = "password updated, you can sign in now";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPhase {
    /// Asking for the account email.
    Email,
    /// The backend mailed a code; collecting code and new password.
    Code,
    /// Terminal.
    Done,
}

/// Two-step password reset machine, same shape as the signup flow.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordResetFlow {
    pub phase: ResetPhase,
    pub email: String,
    pub code: String,
    pub new_password: String,
    pub message: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

impl Default for PasswordResetFlow {
    fn default() -> Self {
        Self {
            phase: ResetPhase::Email,
            email: String::new(),
            code: String::new(),
            new_password: String::new(),
            message: None,
            error: None,
            loading: false,
        }
    }
}

impl PasswordResetFlow {
    pub fn set_code(&mut self, input: &str) {
        self.code = sanitize_otp(input);
    }

    /// Ask the backend to email a reset code.
    pub async fn request<A: AuthApi>(&mut self, api: &A) {
        self.error = None;
        let email = self.email.trim().to_string();
        if email.is_empty() {
            self.error = Some(EMAIL_REQUIRED.to_string());
            self.loading = false;
            return;
        }
        match api.forgot_password(&email).await {
            Ok(response) => {
                self.message = response.message.or_else(|| Some(CODE_SENT.to_string()));
                self.phase = ResetPhase::Code;
            }
            Err(e) => {
                tracing::error!("password reset request failed: {e}");
                self.error = Some(e.surface(REQUEST_FALLBACK));
            }
        }
        self.loading = false;
    }

    /// Submit code and new password.
    pub async fn confirm<A: AuthApi>(&mut self, api: &A) {
        self.error = None;
        if self.code.is_empty() {
            self.error = Some(OTP_REQUIRED.to_string());
            self.loading = false;
            return;
        }
        if self.new_password.len() < 6 {
            self.error = Some(PASSWORD_TOO_SHORT.to_string());
            self.loading = false;
            return;
        }
        let email = self.email.trim().to_string();
        match api
            .reset_password(&email, &self.code, &self.new_password)
            .await
        {
            Ok(response) => {
                self.message = response.message.or_else(|| Some(RESET_DONE.to_string()));
                self.phase = ResetPhase::Done;
            }
            Err(e) => {
                tracing::error!("password reset failed: {e}");
                self.error = Some(e.surface(RESET_FALLBACK));
            }
        }
        self.loading = false;
    }
}

/// Modal dialog driving [`PasswordResetFlow`].
#[component]
pub fn PasswordResetDialog(on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut flow = use_signal(PasswordResetFlow::default);

    let on_request = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            flow.write().loading = true;
            let mut f = flow();
            f.request(&api).await;
            flow.set(f);
        });
    };

    let api2 = use_api();
    let on_confirm = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api2.clone();
        spawn(async move {
            flow.write().loading = true;
            let mut f = flow();
            f.confirm(&api).await;
            flow.set(f);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "p-6",
                h2 { class: "modal-title", "Reset password" }

                if let Some(err) = flow().error {
                    ErrorBanner { message: err }
                }
                if let Some(msg) = flow().message {
                    SuccessBanner { message: msg }
                }

                {match flow().phase {
                    ResetPhase::Email => rsx! {
                        form {
                            class: "auth-form",
                            onsubmit: on_request,
                            Input {
                                class: "w-full",
                                r#type: "email",
                                placeholder: "Account email",
                                value: flow().email,
                                oninput: move |evt: FormEvent| flow.write().email = evt.value(),
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: flow().loading,
                                if flow().loading { "Sending..." } else { "Send OTP" }
                            }
                        }
                    },
                    ResetPhase::Code => rsx! {
                        form {
                            class: "auth-form",
                            onsubmit: on_confirm,
                            Input {
                                class: "w-full",
                                placeholder: "6-digit OTP",
                                value: flow().code,
                                oninput: move |evt: FormEvent| flow.write().set_code(&evt.value()),
                            }
                            Input {
                                class: "w-full",
                                r#type: "password",
                                placeholder: "New password (min 6 characters)",
                                value: flow().new_password,
                                oninput: move |evt: FormEvent| flow.write().new_password = evt.value(),
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: flow().loading || flow().code.len() != 6,
                                if flow().loading { "Resetting..." } else { "Reset password" }
                            }
                        }
                    },
                    ResetPhase::Done => rsx! {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_close.call(()),
                            "Close"
                        }
                    },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, MockApi};
    use api::ApiError;

    #[tokio::test]
    async fn test_request_then_confirm() {
        let api = MockApi::default();
        let mut flow = PasswordResetFlow::default();
        flow.email = "asha@example.com".to_string();

        flow.request(&api).await;
        assert_eq!(flow.phase, ResetPhase::Code);
        assert_eq!(flow.message.as_deref(), Some(CODE_SENT));

        flow.set_code("12a34b56c7");
        assert_eq!(flow.code, "123456");
        flow.new_password = "fresh-pass".to_string();
        flow.confirm(&api).await;

        assert_eq!(flow.phase, ResetPhase::Done);
        assert_eq!(
            api.calls(),
            vec![
                Call::ForgotPassword("asha@example.com".to_string()),
                Call::ResetPassword(
                    "asha@example.com".to_string(),
                    "123456".to_string(),
                    "fresh-pass".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_email_blocks_request() {
        let api = MockApi::default();
        let mut flow = PasswordResetFlow::default();

        flow.request(&api).await;

        assert_eq!(flow.phase, ResetPhase::Email);
        assert_eq!(flow.error.as_deref(), Some(EMAIL_REQUIRED));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_local_checks_before_reset_call() {
        let api = MockApi::default();
        let mut flow = PasswordResetFlow::default();
        flow.email = "asha@example.com".to_string();
        flow.request(&api).await;

        flow.confirm(&api).await;
        assert_eq!(flow.error.as_deref(), Some(OTP_REQUIRED));

        flow.set_code("123456");
        flow.new_password = "abc".to_string();
        flow.confirm(&api).await;
        assert_eq!(flow.error.as_deref(), Some(PASSWORD_TOO_SHORT));

        // Only the forgot-password call went out.
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_failure_keeps_phase() {
        let mut api = MockApi::default();
        api.reset = Err(ApiError::Status {
            status: 400,
            body: Some(serde_json::json!({"error": "invalid OTP"})),
        });
        let mut flow = PasswordResetFlow::default();
        flow.email = "asha@example.com".to_string();
        flow.request(&api).await;
        flow.set_code("123456");
        flow.new_password = "fresh-pass".to_string();

        flow.confirm(&api).await;

        assert_eq!(flow.phase, ResetPhase::Code);
        assert_eq!(flow.error.as_deref(), Some("invalid OTP"));
    }
}
