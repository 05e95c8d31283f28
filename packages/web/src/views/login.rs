//! Login page view.

use dioxus::prelude::*;
use ui::{use_session, LoginForm};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();

    // If already logged in, go straight to the feed
    if session.is_authenticated() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    }

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "CivicVoice" }
            p { class: "auth-subtitle", "Sign in to follow and raise complaints" }

            LoginForm {}

            div {
                class: "auth-links",
                p { "New here?" }
                a { class: "link-button", href: "/signup", "Register as a citizen" }
                a { class: "link-button", href: "/signup/fieldworker", "Register as a field worker" }
                a { class: "link-button", href: "/signup/authority", "Register as a government authority" }
                a { class: "link-button", href: "/signup/admin", "Register as an admin" }
            }
        }
    }
}
