use std::sync::{Arc, Mutex};

use crate::models::SessionIdentity;

/// Storage keys used for the persisted identity markers.
const KEY_USER_ID: &str = "user_id";
const KEY_USERNAME: &str = "username";
const KEY_AUTHENTICATED: &str = "isAuthenticated";
const KEY_USER_TYPE: &str = "user_type";

/// A string key-value store holding the persisted part of a session.
///
/// Implemented by [`crate::MemoryStore`] (tests, native builds) and
/// [`crate::LocalStore`] (browser localStorage, `web` feature). All access is
/// single-threaded on the UI thread; last writer wins.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory holder for the access token.
///
/// Cloning shares the same slot, so the HTTP client and the session service
/// always observe the same token.
#[derive(Clone, Debug, Default)]
pub struct TokenHolder {
    slot: Arc<Mutex<TokenSlot>>,
}

#[derive(Debug, Default)]
struct TokenSlot {
    value: Option<String>,
    writes: usize,
}

impl TokenHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: &str) {
        let mut slot = self.slot.lock().unwrap();
        slot.value = Some(token.to_string());
        slot.writes += 1;
    }

    pub fn get(&self) -> Option<String> {
        self.slot.lock().unwrap().value.clone()
    }

    /// Times a token has been stored since creation; `clear` does not count.
    pub fn write_count(&self) -> usize {
        self.slot.lock().unwrap().writes
    }

    pub fn clear(&self) {
        self.slot.lock().unwrap().value = None;
    }
}

/// Session service with an explicit read/write/clear contract.
///
/// One instance is created at application start and handed to every consumer
/// through context, so no component touches global storage directly.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    token: TokenHolder,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            token: TokenHolder::new(),
        }
    }

    /// The token holder shared with the HTTP client.
    pub fn token_holder(&self) -> TokenHolder {
        self.token.clone()
    }

    /// Store the access token. In-memory only, gone on page reload.
    pub fn set_token(&self, token: &str) {
        self.token.set(token);
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// Persist identity markers and mark the session authenticated.
    pub fn persist_identity(&self, identity: &SessionIdentity) {
        self.store.set(KEY_USER_ID, &identity.user_id);
        self.store.set(KEY_USERNAME, &identity.username);
        self.store.set(KEY_AUTHENTICATED, "true");
        match &identity.user_type {
            Some(user_type) => self.store.set(KEY_USER_TYPE, user_type),
            None => self.store.remove(KEY_USER_TYPE),
        }
    }

    /// Persist identity and token in one step, on verification or login.
    pub fn persist(&self, identity: &SessionIdentity, token: Option<&str>) {
        if let Some(token) = token {
            self.set_token(token);
        }
        self.persist_identity(identity);
    }

    /// The persisted identity, if the session is authenticated.
    pub fn current(&self) -> Option<SessionIdentity> {
        if self.store.get(KEY_AUTHENTICATED).as_deref() != Some("true") {
            return None;
        }
        let user_id = self.store.get(KEY_USER_ID)?;
        let username = self.store.get(KEY_USERNAME)?;
        Some(SessionIdentity {
            user_id,
            username,
            user_type: self.store.get(KEY_USER_TYPE),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Remove everything, used by logout.
    pub fn clear(&self) {
        self.store.remove(KEY_USER_ID);
        self.store.remove(KEY_USERNAME);
        self.store.remove(KEY_AUTHENTICATED);
        self.store.remove(KEY_USER_TYPE);
        self.token.clear();
    }
}
