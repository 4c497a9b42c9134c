//! API utilities for widget-backend communication
//!
//! The widgets are served from the same origin as the Django backend, so
//! every URL is a path joined onto a configurable base.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Join a base URL and a relative path with exactly one slash between them
///
/// # Example
/// ```rust
/// use payroll_widgets::shared::api_utils::api_url;
///
/// let url = api_url("/payroll_system/ajax/", "get-provinces/");
/// assert_eq!(url, "/payroll_system/ajax/get-provinces/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Append a query string built from `query` to `url`
pub fn with_query<Q: Serialize>(url: &str, query: &Q) -> Result<String, String> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    if query_string.is_empty() {
        return Ok(url.to_string());
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}", url, separator, query_string))
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
