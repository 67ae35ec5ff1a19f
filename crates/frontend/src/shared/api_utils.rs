//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::DashboardConfig;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses the configured base when one was set at build time; otherwise the
/// URL is derived from the current window location on the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:5000" or "https://sales.example.com"
/// - Empty string if window is not available (requests become same-origin)
pub fn api_base(config: &DashboardConfig) -> String {
    if let Some(base) = &config.api_base {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.api_port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("http://localhost:5000", "/api/sales/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

/// Build an API URL with a query string serialized from `query`
pub fn api_url_with_query<Q: Serialize>(
    base: &str,
    path: &str,
    query: &Q,
) -> Result<String, serde_qs::Error> {
    let query_string = serde_qs::to_string(query)?;
    if query_string.is_empty() {
        Ok(api_url(base, path))
    } else {
        Ok(format!("{}?{}", api_url(base, path), query_string))
    }
}
