//! # REST client for the CivicVoice backend
//!
//! Every piece of business logic (accounts, OTP issuance, departments,
//! complaints, assignment) lives in an external backend service; this crate
//! is the client half of that contract. It knows the endpoint paths, the
//! request and response shapes, and how backend failures map to user-facing
//! messages. Nothing here renders UI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: reqwest wrapper, base URL, bearer-token attachment |
//! | [`error`] | [`ApiError`] taxonomy and the error/message/fallback surfacing rules |
//! | [`models`] | Wire types: roles, departments, complaints, auth responses |
//!
//! ## Test seams
//!
//! The flow state machines in the `ui` crate never talk to [`ApiClient`]
//! directly; they are generic over [`AuthApi`] and [`ComplaintsApi`], which
//! `ApiClient` implements. Tests substitute recording mocks.

use serde_json::Value;

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{
    Complaint, Department, FieldWorker, LoginResponse, MessageResponse, SignupResponse,
    SignupRole, VerifyResponse,
};

/// Authentication and account endpoints.
pub trait AuthApi {
    /// Register an account of the given role. `body` is the role-specific
    /// payload assembled by the signup flow.
    async fn signup(&self, role: SignupRole, body: Value) -> Result<SignupResponse, ApiError>;

    /// Confirm an emailed OTP code.
    async fn verify_otp(&self, email: &str, otp: &str) -> Result<VerifyResponse, ApiError>;

    /// Authenticate with username and password.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    async fn list_departments(&self) -> Result<Vec<Department>, ApiError>;

    /// Create a department on the fly, used when a signup form selects
    /// "other" and supplies a new name.
    async fn create_department(&self, name: &str) -> Result<Department, ApiError>;

    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError>;

    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError>;
}

/// Complaint feed and assignment endpoints.
pub trait ComplaintsApi {
    /// The complaint list shown to citizens.
    async fn feed(&self) -> Result<Vec<Complaint>, ApiError>;

    /// The complaint list shown to government authorities.
    async fn gov_feed(&self) -> Result<Vec<Complaint>, ApiError>;

    async fn search(&self, query: &str) -> Result<Vec<Complaint>, ApiError>;

    /// Field workers eligible for a specific complaint, or the general list
    /// when no complaint is given.
    async fn available_workers(
        &self,
        complaint_id: Option<u32>,
    ) -> Result<Vec<FieldWorker>, ApiError>;

    async fn assign(&self, complaint_id: u32, fieldworker_id: &str) -> Result<(), ApiError>;
}
