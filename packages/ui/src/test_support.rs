//! Recording mock backend shared by the flow state machine tests.

use std::cell::RefCell;

use api::{
    ApiError, AuthApi, Complaint, ComplaintsApi, Department, FieldWorker, LoginResponse,
    MessageResponse, SignupResponse, SignupRole, VerifyResponse,
};
use serde_json::Value;

/// One observed backend call, in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Signup(SignupRole, Value),
    VerifyOtp(String, String),
    Login(String, String),
    ListDepartments,
    CreateDepartment(String),
    ForgotPassword(String),
    ResetPassword(String, String, String),
    Feed,
    GovFeed,
    Search(String),
    AvailableWorkers(Option<u32>),
    Assign(u32, String),
}

/// Mock implementing both API traits. Each endpoint returns a clone of its
/// configured result; tests inspect `calls()` for ordering and payloads.
pub struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    pub signup: Result<SignupResponse, ApiError>,
    pub verify: Result<VerifyResponse, ApiError>,
    pub login: Result<LoginResponse, ApiError>,
    pub departments: Result<Vec<Department>, ApiError>,
    pub created_department: Result<Department, ApiError>,
    pub forgot: Result<MessageResponse, ApiError>,
    pub reset: Result<MessageResponse, ApiError>,
    pub feed: Result<Vec<Complaint>, ApiError>,
    pub gov_feed: Result<Vec<Complaint>, ApiError>,
    pub search: Result<Vec<Complaint>, ApiError>,
    pub workers: Result<Vec<FieldWorker>, ApiError>,
    pub assign: Result<(), ApiError>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            signup: Ok(SignupResponse::default()),
            verify: Ok(VerifyResponse::default()),
            login: Ok(LoginResponse::default()),
            departments: Ok(Vec::new()),
            created_department: Ok(Department {
                id: 1,
                name: "General".to_string(),
            }),
            forgot: Ok(MessageResponse::default()),
            reset: Ok(MessageResponse::default()),
            feed: Ok(Vec::new()),
            gov_feed: Ok(Vec::new()),
            search: Ok(Vec::new()),
            workers: Ok(Vec::new()),
            assign: Ok(()),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl AuthApi for MockApi {
    async fn signup(&self, role: SignupRole, body: Value) -> Result<SignupResponse, ApiError> {
        self.record(Call::Signup(role, body));
        self.signup.clone()
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> Result<VerifyResponse, ApiError> {
        self.record(Call::VerifyOtp(email.to_string(), otp.to_string()));
        self.verify.clone()
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.record(Call::Login(username.to_string(), password.to_string()));
        self.login.clone()
    }

    async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.record(Call::ListDepartments);
        self.departments.clone()
    }

    async fn create_department(&self, name: &str) -> Result<Department, ApiError> {
        self.record(Call::CreateDepartment(name.to_string()));
        self.created_department.clone()
    }

    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.record(Call::ForgotPassword(email.to_string()));
        self.forgot.clone()
    }

    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.record(Call::ResetPassword(
            email.to_string(),
            otp.to_string(),
            new_password.to_string(),
        ));
        self.reset.clone()
    }
}

impl ComplaintsApi for MockApi {
    async fn feed(&self) -> Result<Vec<Complaint>, ApiError> {
        self.record(Call::Feed);
        self.feed.clone()
    }

    async fn gov_feed(&self) -> Result<Vec<Complaint>, ApiError> {
        self.record(Call::GovFeed);
        self.gov_feed.clone()
    }

    async fn search(&self, query: &str) -> Result<Vec<Complaint>, ApiError> {
        self.record(Call::Search(query.to_string()));
        self.search.clone()
    }

    async fn available_workers(
        &self,
        complaint_id: Option<u32>,
    ) -> Result<Vec<FieldWorker>, ApiError> {
        self.record(Call::AvailableWorkers(complaint_id));
        self.workers.clone()
    }

    async fn assign(&self, complaint_id: u32, fieldworker_id: &str) -> Result<(), ApiError> {
        self.record(Call::Assign(complaint_id, fieldworker_id.to_string()));
        self.assign.clone()
    }
}

/// A complaint with the given id and upvote count, other fields filled in.
pub fn complaint(id: u32, upvotes: u32) -> Complaint {
    Complaint {
        id,
        author: format!("author-{id}"),
        posted_at: "2026-08-01T10:00:00Z".to_string(),
        content: format!("complaint {id}"),
        address: "12 Main Road".to_string(),
        assigned_to: None,
        upvotes,
    }
}
