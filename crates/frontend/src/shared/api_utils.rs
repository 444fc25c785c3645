//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Taken from the loaded configuration, without a trailing slash.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
pub fn api_base() -> String {
    config().api.base_url.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The endpoint path (should start with "/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/upload/");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Build a URL with an encoded query string
///
/// # Example
/// ```rust,ignore
/// let url = api_url_with_query("/ask/", &[("q", "What is X?")]);
/// // http://localhost:8000/ask/?q=What%20is%20X%3F
/// ```
pub fn api_url_with_query(path: &str, params: &[(&str, &str)]) -> String {
    with_query(&api_url(path), params)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn with_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", url, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/upload/"),
            "http://localhost:8000/upload/"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "/ask/"),
            "http://localhost:8000/ask/"
        );
    }

    #[test]
    fn test_query_is_encoded() {
        assert_eq!(
            with_query("http://h/ask/", &[("q", "What is X?")]),
            "http://h/ask/?q=What%20is%20X%3F"
        );
        assert_eq!(
            with_query("http://h/ask/", &[("q", "a&b=c")]),
            "http://h/ask/?q=a%26b%3Dc"
        );
    }

    #[test]
    fn test_no_params() {
        assert_eq!(with_query("http://h/ask/", &[]), "http://h/ask/");
    }
}
