//! API URL helpers for frontend-backend communication

/// Port the backend listens on. The frontend may be served from a dev
/// server on a different port, so the host comes from the current
/// location but the port is fixed.
const API_PORT: u16 = 3000;

/// Base URL for API requests, derived from the current window location.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
