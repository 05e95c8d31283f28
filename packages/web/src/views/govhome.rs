//! Government-authority console: complaint list with assignment.

use dioxus::prelude::*;
use ui::{use_session, AssignmentConsole, LogoutButton};

#[component]
pub fn GovHome() -> Element {
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

    if identity.user_type.as_deref() != Some("authority") {
        return rsx! {
            div {
                class: "page",
                p { class: "feed-status", "A government authority account is required here." }
                a { class: "link-button", href: "/", "Back to the feed" }
            }
        };
    }

    rsx! {
        header {
            class: "topbar",
            h1 { class: "topbar-title", "Assignment console" }
            div {
                class: "topbar-actions",
                span { class: "topbar-user", "{identity.username}" }
                a { class: "link-button", href: "/", "Feed" }
                LogoutButton {}
            }
        }

        main {
            class: "page",
            AssignmentConsole {}
        }
    }
}
