//! Registration page views, one per account category. All four wrap the same
//! parameterized form.

use api::SignupRole;
use dioxus::prelude::*;
use ui::SignupForm;

#[component]
fn SignupPage(role: SignupRole) -> Element {
    rsx! {
        div {
            class: "auth-page",
            SignupForm { role: role }
            p {
                class: "auth-links",
                "Already have an account? "
                a { class: "link-button", href: "/login", "Sign in" }
            }
        }
    }
}

#[component]
pub fn SignupCitizen() -> Element {
    rsx! { SignupPage { role: SignupRole::Citizen } }
}

#[component]
pub fn SignupFieldWorker() -> Element {
    rsx! { SignupPage { role: SignupRole::FieldWorker } }
}

#[component]
pub fn SignupAuthority() -> Element {
    rsx! { SignupPage { role: SignupRole::Authority } }
}

#[component]
pub fn SignupAdmin() -> Element {
    rsx! { SignupPage { role: SignupRole::Admin } }
}
