//! Full-page navigation to backend-owned routes.
//!
//! Login, logout, and the genre view are backend redirect chains (the OAuth
//! handshake included), so they replace the whole document instead of going
//! through the client router.

use crate::api;

pub fn login_url() -> String {
    api::api_url("/api/login")
}

pub fn logout_url() -> String {
    api::api_url("/api/logout")
}

pub fn genres_url() -> String {
    api::api_url("/api/genres")
}

/// Point the browser at `url`, ceding control to the backend.
#[cfg(target_arch = "wasm32")]
pub fn redirect(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        tracing::warn!("redirect to {url} failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(url: &str) {
    tracing::debug!("redirect suppressed off-wasm: {url}");
}
