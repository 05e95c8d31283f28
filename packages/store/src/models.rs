use serde::{Deserialize, Serialize};

/// Identity markers for a signed-in user, as persisted on the client.
///
/// The access token is deliberately not part of this struct; it lives in the
/// in-memory [`crate::TokenHolder`] only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub user_id: String,
    pub username: String,
    /// Role of the account: "citizen", "fieldworker", "authority" or "admin".
    /// Absent when the backend did not report one.
    pub user_type: Option<String>,
}
