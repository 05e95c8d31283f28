use serde::{Deserialize, Serialize};

/// The four account categories with distinct registration payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignupRole {
    Citizen,
    FieldWorker,
    Authority,
    Admin,
}

impl SignupRole {
    /// Endpoint path for this role's registration call.
    pub fn signup_path(self) -> &'static str {
        match self {
            SignupRole::Citizen => "/users/signup/citizens/",
            SignupRole::FieldWorker => "/users/signup/fieldworker/",
            SignupRole::Authority => "/users/signup/authorities/",
            SignupRole::Admin => "/users/signup/admin/",
        }
    }

    /// Admin accounts are activated without an email OTP round trip.
    pub fn has_otp_phase(self) -> bool {
        !matches!(self, SignupRole::Admin)
    }

    /// Field workers and authorities register against a department.
    pub fn uses_departments(self) -> bool {
        matches!(self, SignupRole::FieldWorker | SignupRole::Authority)
    }

    pub fn title(self) -> &'static str {
        match self {
            SignupRole::Citizen => "Citizen signup",
            SignupRole::FieldWorker => "Field worker signup",
            SignupRole::Authority => "Government authority signup",
            SignupRole::Admin => "Admin signup",
        }
    }
}

/// A government department, fetched read-only by the field worker and
/// authority forms and created on the fly for the "other" selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
}

/// A field worker eligible for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWorker {
    pub id: u32,
    pub username: String,
}

/// A complaint as rendered in the feed. Upvotes are a client-side counter
/// on top of whatever the backend reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: u32,
    pub author: String,
    pub posted_at: String,
    pub content: String,
    pub address: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub upvotes: u32,
}

/// Response to a registration call. A message means the backend accepted the
/// draft and, for OTP roles, sent a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response to OTP verification. `access` and `user_id` are present when the
/// backend signs the user in directly after verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VerifyResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Response to a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

/// Generic `{message}` acknowledgement used by the password-reset endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
