//! The registration lifecycle, shared by all four signup forms.
//!
//! One parameterized machine drives citizen, field worker, government
//! authority and admin registration. The OTP roles run
//! `Collecting -> AwaitingCode -> Verified`; admin accounts skip the OTP
//! round trip entirely and end at `Submitted`. Errors never change the
//! current phase, they only attach a message.

use api::{AuthApi, SignupRole};
use serde_json::{json, Value};
use store::{Session, SessionIdentity};

use crate::draft::{DepartmentChoice, RegistrationDraft};

const SIGNUP_FALLBACK: &str = "signup failed";
const DEPARTMENT_FALLBACK: &str = "could not create department";
const VERIFY_FALLBACK: &str = "OTP verification failed";
const RESEND_FALLBACK: &str = "could not resend OTP";
const RESEND_CONFIRMATION: &str = "a new OTP has been sent to your email";
const OTP_SENT: &str = "OTP sent to your email";
const OTP_REQUIRED: &str = "OTP required";

/// Keep only ASCII digits, truncated to the 6-digit code length.
pub fn sanitize_otp(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(6).collect()
}

/// Phase of one registration flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupPhase {
    /// Gathering form input.
    Collecting,
    /// The backend acknowledged the draft and emailed a code to `email`.
    AwaitingCode { email: String },
    /// Terminal phase for admin signups, which have no OTP step.
    Submitted,
    /// Terminal phase for OTP roles.
    Verified,
}

/// State machine for one signup form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupFlow {
    pub role: SignupRole,
    pub draft: RegistrationDraft,
    pub phase: SignupPhase,
    /// Sanitized OTP input, digits only, at most 6.
    pub code: String,
    pub message: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    /// Set after a verification that signed the user in; the hosting
    /// component schedules the delayed navigation.
    pub navigate: bool,
    /// The registration body that entered AwaitingCode, re-sent verbatim by
    /// `resend` so an on-the-fly department is not created twice.
    submission: Option<Value>,
}

impl SignupFlow {
    pub fn new(role: SignupRole) -> Self {
        Self {
            role,
            draft: RegistrationDraft::default(),
            phase: SignupPhase::Collecting,
            code: String::new(),
            message: None,
            error: None,
            loading: false,
            navigate: false,
            submission: None,
        }
    }

    pub fn set_code(&mut self, input: &str) {
        self.code = sanitize_otp(input);
    }

    /// The UI enables the verify action only for a complete 6-digit code.
    pub fn can_verify(&self) -> bool {
        self.code.len() == 6
    }

    /// Submit the draft from `Collecting`. Validates locally first; for a
    /// department selection of "other" a department-creation call runs before
    /// registration and a failure there aborts the attempt.
    pub async fn submit<A: AuthApi>(&mut self, api: &A) {
        self.error = None;
        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            self.loading = false;
            return;
        }

        let mut department_id = match self.draft.department {
            DepartmentChoice::Existing(id) => Some(id),
            _ => None,
        };
        if self.role.uses_departments() && self.draft.department == DepartmentChoice::Other {
            let name = self.draft.new_department_name.trim().to_string();
            match api.create_department(&name).await {
                Ok(department) => department_id = Some(department.id),
                Err(e) => {
                    tracing::error!("department creation failed: {e}");
                    self.error = Some(e.surface(DEPARTMENT_FALLBACK));
                    self.loading = false;
                    return;
                }
            }
        }

        let body = self.registration_body(department_id);
        match api.signup(self.role, body.clone()).await {
            Ok(response) => {
                self.submission = Some(body);
                self.message = response.message.or_else(|| Some(OTP_SENT.to_string()));
                self.code.clear();
                self.phase = if self.role.has_otp_phase() {
                    SignupPhase::AwaitingCode {
                        email: self.draft.email.trim().to_string(),
                    }
                } else {
                    SignupPhase::Submitted
                };
            }
            Err(e) => {
                tracing::error!("signup failed: {e}");
                self.error = Some(e.surface(SIGNUP_FALLBACK));
            }
        }
        self.loading = false;
    }

    /// Verify the entered code from `AwaitingCode`. On success the backend
    /// may sign the user in directly: a returned token is stored, a returned
    /// user id persists the identity and requests navigation.
    pub async fn verify<A: AuthApi>(&mut self, api: &A, session: &Session) {
        let email = match &self.phase {
            SignupPhase::AwaitingCode { email } => email.clone(),
            _ => {
                self.loading = false;
                return;
            }
        };
        if self.code.is_empty() {
            self.error = Some(OTP_REQUIRED.to_string());
            self.loading = false;
            return;
        }

        self.error = None;
        self.navigate = false;
        match api.verify_otp(&email, &self.code).await {
            Ok(response) => {
                self.message = response.message.clone();
                if let Some(token) = &response.access {
                    session.set_token(token);
                }
                if let Some(user_id) = response.user_id {
                    let identity = SessionIdentity {
                        user_id: user_id.to_string(),
                        username: response
                            .username
                            .clone()
                            .unwrap_or_else(|| self.draft.username.trim().to_string()),
                        user_type: response.user_type.clone(),
                    };
                    session.persist_identity(&identity);
                    self.navigate = true;
                }
                self.phase = SignupPhase::Verified;
            }
            Err(e) => {
                tracing::error!("OTP verification failed: {e}");
                self.error = Some(e.surface(VERIFY_FALLBACK));
            }
        }
        self.loading = false;
    }

    /// Re-invoke the registration call that entered `AwaitingCode`, without
    /// changing phase.
    pub async fn resend<A: AuthApi>(&mut self, api: &A) {
        let (SignupPhase::AwaitingCode { .. }, Some(body)) = (&self.phase, self.submission.clone())
        else {
            self.loading = false;
            return;
        };
        match api.signup(self.role, body).await {
            Ok(_) => {
                self.error = None;
                self.message = Some(RESEND_CONFIRMATION.to_string());
            }
            Err(e) => {
                tracing::error!("OTP resend failed: {e}");
                self.error = Some(e.surface(RESEND_FALLBACK));
            }
        }
        self.loading = false;
    }

    /// Return to `Collecting`, clearing the code and any message or error.
    pub fn back(&mut self) {
        self.phase = SignupPhase::Collecting;
        self.code.clear();
        self.message = None;
        self.error = None;
    }

    fn registration_body(&self, department_id: Option<u32>) -> Value {
        let d = &self.draft;
        let mut body = json!({
            "username": d.username.trim(),
            "email": d.email.trim(),
            "password": d.password,
        });
        match self.role {
            SignupRole::Citizen => {
                body["first_name"] = json!(d.first_name.trim());
                body["last_name"] = json!(d.last_name.trim());
                body["phone_number"] = json!(d.phone_number.trim());
            }
            SignupRole::FieldWorker | SignupRole::Authority => {
                body["first_name"] = json!(d.first_name.trim());
                body["last_name"] = json!(d.last_name.trim());
                body["phone_number"] = json!(d.phone_number.trim());
                body["department"] = json!(department_id);
            }
            SignupRole::Admin => {}
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, MockApi};
    use api::{ApiError, Department, SignupResponse, VerifyResponse};
    use serde_json::json;
    use std::sync::Arc;
    use store::MemoryStore;

    fn flow(role: SignupRole) -> SignupFlow {
        let mut flow = SignupFlow::new(role);
        flow.draft.first_name = "Asha".to_string();
        flow.draft.last_name = "Rao".to_string();
        flow.draft.username = "asha".to_string();
        flow.draft.email = "asha@example.com".to_string();
        flow.draft.password = "secret1".to_string();
        flow.draft.confirm_password = "secret1".to_string();
        flow.draft.phone_number = "9876543210".to_string();
        flow
    }

    fn session() -> (Session, MemoryStore) {
        let store = MemoryStore::new();
        (Session::new(Arc::new(store.clone())), store)
    }

    #[test]
    fn test_sanitize_otp_keeps_first_six_digits() {
        assert_eq!(sanitize_otp("a1b2c3d4e5f6g7"), "123456");
        assert_eq!(sanitize_otp("12"), "12");
        assert_eq!(sanitize_otp("abc"), "");
    }

    #[tokio::test]
    async fn test_password_mismatch_blocks_network() {
        let api = MockApi::default();
        let mut flow = flow(SignupRole::Citizen);
        flow.draft.confirm_password = "different".to_string();

        flow.submit(&api).await;

        assert_eq!(flow.phase, SignupPhase::Collecting);
        assert_eq!(flow.error.as_deref(), Some("passwords do not match"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_short_password_blocks_network() {
        let api = MockApi::default();
        let mut flow = flow(SignupRole::Citizen);
        flow.draft.password = "abc".to_string();
        flow.draft.confirm_password = "abc".to_string();

        flow.submit(&api).await;

        assert_eq!(flow.phase, SignupPhase::Collecting);
        assert_eq!(
            flow.error.as_deref(),
            Some("password must be at least 6 characters")
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_signup_and_verify_round_trip() {
        let mut api = MockApi::default();
        api.signup = Ok(SignupResponse {
            message: Some("OTP sent".to_string()),
        });
        api.verify = Ok(VerifyResponse {
            message: Some("account verified".to_string()),
            access: Some("tok-xyz".to_string()),
            user_id: Some(9),
            username: Some("asha".to_string()),
            user_type: Some("citizen".to_string()),
        });
        let (session, store_backend) = session();

        let mut flow = flow(SignupRole::Citizen);
        flow.submit(&api).await;

        assert_eq!(
            flow.phase,
            SignupPhase::AwaitingCode {
                email: "asha@example.com".to_string()
            }
        );
        assert_eq!(flow.message.as_deref(), Some("OTP sent"));

        flow.set_code("123456");
        flow.verify(&api, &session).await;

        assert_eq!(flow.phase, SignupPhase::Verified);
        assert!(flow.navigate);
        assert_eq!(flow.message.as_deref(), Some("account verified"));
        assert_eq!(session.token(), Some("tok-xyz".to_string()));
        // Verification stores the token in one write, not several.
        assert_eq!(session.token_holder().write_count(), 1);

        use store::KeyValueStore;
        assert_eq!(store_backend.get("user_id"), Some("9".to_string()));
        assert_eq!(store_backend.get("username"), Some("asha".to_string()));
        assert_eq!(store_backend.get("isAuthenticated"), Some("true".to_string()));
        assert_eq!(store_backend.get("user_type"), Some("citizen".to_string()));

        assert_eq!(
            api.calls().last(),
            Some(&Call::VerifyOtp(
                "asha@example.com".to_string(),
                "123456".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_empty_code_rejected_without_network() {
        let api = MockApi::default();
        let (session, _) = session();
        let mut flow = flow(SignupRole::Citizen);
        flow.submit(&api).await;

        flow.verify(&api, &session).await;

        assert_eq!(flow.error.as_deref(), Some("OTP required"));
        assert!(matches!(flow.phase, SignupPhase::AwaitingCode { .. }));
        assert!(!api
            .calls()
            .iter()
            .any(|c| matches!(c, Call::VerifyOtp(_, _))));
    }

    #[tokio::test]
    async fn test_back_then_resubmit_is_fresh() {
        let api = MockApi::default();
        let mut flow = flow(SignupRole::Citizen);

        flow.submit(&api).await;
        flow.set_code("9999");
        flow.back();

        assert_eq!(flow.phase, SignupPhase::Collecting);
        assert!(flow.code.is_empty());
        assert!(flow.message.is_none());
        assert!(flow.error.is_none());

        flow.draft.email = "new@example.com".to_string();
        flow.submit(&api).await;

        assert_eq!(
            flow.phase,
            SignupPhase::AwaitingCode {
                email: "new@example.com".to_string()
            }
        );
        assert!(flow.code.is_empty());
    }

    #[tokio::test]
    async fn test_department_other_creates_then_registers() {
        let mut api = MockApi::default();
        api.created_department = Ok(Department {
            id: 5,
            name: "Sanitation".to_string(),
        });
        let mut flow = flow(SignupRole::FieldWorker);
        flow.draft.select_department("other");
        flow.draft.new_department_name = "Sanitation".to_string();

        flow.submit(&api).await;

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::CreateDepartment("Sanitation".to_string()));
        let Call::Signup(role, body) = &calls[1] else {
            panic!("expected signup call, got {:?}", calls[1]);
        };
        assert_eq!(*role, SignupRole::FieldWorker);
        assert_eq!(body["department"], json!(5));
        assert!(matches!(flow.phase, SignupPhase::AwaitingCode { .. }));
    }

    #[tokio::test]
    async fn test_department_failure_aborts_registration() {
        let mut api = MockApi::default();
        api.created_department = Err(ApiError::Status {
            status: 400,
            body: Some(json!({"error": "name exists"})),
        });
        let mut flow = flow(SignupRole::Authority);
        flow.draft.select_department("other");
        flow.draft.new_department_name = "Water".to_string();

        flow.submit(&api).await;

        assert_eq!(flow.phase, SignupPhase::Collecting);
        assert_eq!(flow.error.as_deref(), Some("name exists"));
        assert!(!api.calls().iter().any(|c| matches!(c, Call::Signup(_, _))));
    }

    #[tokio::test]
    async fn test_resend_repeats_submission_without_phase_change() {
        let api = MockApi::default();
        let mut flow = flow(SignupRole::Citizen);
        flow.submit(&api).await;
        let phase = flow.phase.clone();

        flow.resend(&api).await;

        assert_eq!(flow.phase, phase);
        assert_eq!(flow.message.as_deref(), Some(RESEND_CONFIRMATION));
        let signups = api
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::Signup(_, _)))
            .count();
        assert_eq!(signups, 2);
    }

    #[tokio::test]
    async fn test_resend_failure_surfaces_resend_error() {
        let mut api = MockApi::default();
        let mut flow = flow(SignupRole::Citizen);
        flow.submit(&api).await;

        api.signup = Err(ApiError::Status {
            status: 500,
            body: None,
        });
        flow.resend(&api).await;

        assert_eq!(flow.error.as_deref(), Some(RESEND_FALLBACK));
        assert!(matches!(flow.phase, SignupPhase::AwaitingCode { .. }));
    }

    #[tokio::test]
    async fn test_signup_error_priority() {
        let mut api = MockApi::default();
        api.signup = Err(ApiError::Status {
            status: 400,
            body: Some(json!({"error": "username taken", "message": "ignored"})),
        });
        let mut flow = flow(SignupRole::Citizen);

        flow.submit(&api).await;

        assert_eq!(flow.phase, SignupPhase::Collecting);
        assert_eq!(flow.error.as_deref(), Some("username taken"));
    }

    #[tokio::test]
    async fn test_admin_signup_skips_otp_phase() {
        let api = MockApi::default();
        let mut flow = flow(SignupRole::Admin);

        flow.submit(&api).await;

        assert_eq!(flow.phase, SignupPhase::Submitted);
        let Call::Signup(_, body) = &api.calls()[0] else {
            panic!("expected signup call");
        };
        // Admin payload carries credentials only.
        assert!(body.get("first_name").is_none());
        assert!(body.get("department").is_none());
    }
}
