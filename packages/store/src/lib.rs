//! Client-side session persistence for the CivicVoice front end.
//!
//! The backend owns all durable state; this crate only holds the identity of
//! the signed-in user on the client. Identity markers (user id, username,
//! user type, the `isAuthenticated` flag) go into a [`KeyValueStore`], while
//! the access token stays in an in-memory [`TokenHolder`] so it never touches
//! persistent storage.

pub mod models;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

mod session;
pub use session::{KeyValueStore, Session, TokenHolder};

pub use models::SessionIdentity;
