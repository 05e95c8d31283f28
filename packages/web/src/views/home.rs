//! Citizen home: the complaint feed.

use dioxus::prelude::*;
use ui::{use_session, ComplaintFeed, LogoutButton};

/// Home page component. Requires a session; anonymous visitors are sent to
/// the login page.
#[component]
pub fn Home() -> Element {
    let session = use_session();

    let Some(identity) = session.current() else {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        return rsx! {};
    };

    let is_authority = identity.user_type.as_deref() == Some("authority");

    rsx! {
        header {
            class: "topbar",
            h1 { class: "topbar-title", "CivicVoice" }
            div {
                class: "topbar-actions",
                span { class: "topbar-user", "{identity.username}" }
                if is_authority {
                    a { class: "link-button", href: "/govhome", "Assignment console" }
                }
                LogoutButton {}
            }
        }

        main {
            class: "page",
            ComplaintFeed {}
        }
    }
}
