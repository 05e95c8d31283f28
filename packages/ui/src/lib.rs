//! Shared UI for the CivicVoice workspace: form drafts, the signup/OTP flow
//! state machines, session context, and the complaint feed components.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod nav;

mod session;
pub use session::{use_api, use_session, LogoutButton, SessionProvider};

pub mod draft;
pub use draft::{DepartmentChoice, RegistrationDraft, ValidationError};

pub mod signup;
pub use signup::{SignupFlow, SignupPhase};

mod signup_form;
pub use signup_form::SignupForm;

mod login;
pub use login::{LoginForm, LoginState};

pub mod password_reset;
pub use password_reset::{PasswordResetFlow, ResetPhase};

pub mod feed;
pub use feed::{ComplaintFeed, FeedKind, FeedState};

pub mod assign;
pub use assign::{AssignState, AssignmentConsole};

mod modal;
pub use modal::ModalOverlay;

mod connection;
pub use connection::ConnectionStatus;

#[cfg(test)]
pub(crate) mod test_support;
