//! Navigation helpers. Full-page redirects, matching how the session is
//! re-read from storage on load.

/// Delay before the post-success redirect, long enough to read the
/// confirmation message.
pub const REDIRECT_DELAY_MS: u64 = 1200;

pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} skipped outside the browser");
    }
}

/// Sleep for the fixed redirect delay, then navigate. Callers run this inside
/// a `spawn`ed task, which Dioxus drops on unmount, so tearing the component
/// down cancels the pending navigation.
pub async fn redirect_after_delay(path: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
    redirect(path);
}
