use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use store::TokenHolder;

use crate::error::ApiError;
use crate::models::{
    Complaint, Department, FieldWorker, LoginResponse, MessageResponse, SignupResponse,
    SignupRole, VerifyResponse,
};
use crate::{AuthApi, ComplaintsApi};

/// Default backend origin for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client for the backend. Cheap to clone: the reqwest client and the
/// token holder are both handle types.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: TokenHolder,
}

impl ApiClient {
    /// `token` is shared with the session service, so a token stored on login
    /// is attached to every later request.
    pub fn new(base_url: impl Into<String>, token: TokenHolder) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)))
    }

    async fn recv_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Unexpected(e.to_string()))
        } else {
            let body = response.json::<Value>().await.ok();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Like [`Self::recv_json`] but discards the success body, for endpoints
    /// whose acknowledgement payload we do not use.
    async fn recv_unit(request: RequestBuilder) -> Result<(), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.json::<Value>().await.ok();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Lightweight reachability probe against a known read endpoint.
    pub async fn test_connection(&self) -> Result<(), ApiError> {
        Self::recv_unit(self.get("/users/departments/")).await
    }
}

impl AuthApi for ApiClient {
    async fn signup(&self, role: SignupRole, body: Value) -> Result<SignupResponse, ApiError> {
        Self::recv_json(self.post(role.signup_path()).json(&body)).await
    }

    async fn verify_otp(&self, email: &str, otp: &str) -> Result<VerifyResponse, ApiError> {
        let body = json!({ "email": email, "otp": otp });
        Self::recv_json(self.post("/users/verify-otp/").json(&body)).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = json!({ "username": username, "password": password });
        Self::recv_json(self.post("/users/login/").json(&body)).await
    }

    async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        Self::recv_json(self.get("/users/departments/")).await
    }

    async fn create_department(&self, name: &str) -> Result<Department, ApiError> {
        let body = json!({ "name": name });
        Self::recv_json(self.post("/users/departments/").json(&body)).await
    }

    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let body = json!({ "email": email });
        Self::recv_json(self.post("/users/forgot-password/").json(&body)).await
    }

    async fn reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let body = json!({ "email": email, "otp": otp, "new_password": new_password });
        Self::recv_json(self.post("/users/reset-password/").json(&body)).await
    }
}

impl ComplaintsApi for ApiClient {
    async fn feed(&self) -> Result<Vec<Complaint>, ApiError> {
        Self::recv_json(self.get("/complaints/")).await
    }

    async fn gov_feed(&self) -> Result<Vec<Complaint>, ApiError> {
        Self::recv_json(self.get("/complaints/govhome/")).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Complaint>, ApiError> {
        Self::recv_json(self.get("/complaints/search/").query(&[("q", query)])).await
    }

    async fn available_workers(
        &self,
        complaint_id: Option<u32>,
    ) -> Result<Vec<FieldWorker>, ApiError> {
        let path = match complaint_id {
            Some(id) => format!("/complaints/available-workers/{id}/"),
            None => "/complaints/available-workers/".to_string(),
        };
        Self::recv_json(self.get(&path)).await
    }

    async fn assign(&self, complaint_id: u32, fieldworker_id: &str) -> Result<(), ApiError> {
        let body = json!({ "fieldworker_id": fieldworker_id });
        Self::recv_unit(
            self.post(&format!("/complaints/assign/{complaint_id}/"))
                .json(&body),
        )
        .await
    }
}
