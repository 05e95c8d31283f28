//! Session context for the application.
//!
//! One [`Session`] service and one [`ApiClient`] are created at startup and
//! handed to every component through context, so nothing reaches for global
//! storage directly. The two share a token holder: a token stored on login is
//! attached to every later request.

use std::sync::Arc;

use api::ApiClient;
use dioxus::prelude::*;
use store::{KeyValueStore, Session};

/// The session service (read/write/clear contract).
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// The shared backend client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

fn storage_backend() -> Arc<dyn KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
}

/// Provider component wiring up the session service and the API client.
/// Wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_hook(|| Session::new(storage_backend()));
    let api = use_hook({
        let session = session.clone();
        move || ApiClient::new(api::DEFAULT_BASE_URL, session.token_holder())
    });

    use_context_provider(|| session);
    use_context_provider(|| api);

    rsx! {
        {children}
    }
}

/// Button that clears the session and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    let onclick = move |_| {
        session.clear();
        crate::nav::redirect("/login");
    };

    rsx! {
        button {
            class: "btn btn-outline {class}",
            onclick: onclick,
            "{label}"
        }
    }
}
