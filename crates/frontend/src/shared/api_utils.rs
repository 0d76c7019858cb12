//! Helpers for building backend URLs
//!
//! The backend listens on port 3000 on the same host that served the page,
//! both when it serves the bundle itself and under `trunk serve`.

pub const BACKEND_PORT: u16 = 3000;

/// Base URL for API requests, e.g. "http://localhost:3000".
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
