//! Backend reachability badge for the login view.

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaTriangleExclamation};
use crate::session::use_api;
use crate::Icon;

/// Result of the last reachability probe: `None` while checking.
type ProbeResult = Option<Result<(), String>>;

/// Performs one lightweight GET against a known read endpoint on mount and
/// reports the outcome. Purely informational; login itself does its own
/// error mapping.
#[component]
pub fn ConnectionStatus() -> Element {
    let api = use_api();
    let mut probe = use_signal(|| ProbeResult::None);

    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            let outcome = api
                .test_connection()
                .await
                .map_err(|e| e.login_message());
            probe.set(Some(outcome));
        }
    });

    match probe() {
        None => rsx! {
            span { class: "connection connection--checking", "checking server..." }
        },
        Some(Ok(())) => rsx! {
            span {
                class: "connection connection--online",
                title: "Server reachable",
                Icon { icon: FaCircleCheck, width: 12, height: 12 }
                " server reachable"
            }
        },
        Some(Err(message)) => rsx! {
            span {
                class: "connection connection--offline",
                title: "{message}",
                Icon { icon: FaTriangleExclamation, width: 12, height: 12 }
                " {message}"
            }
        },
    }
}
