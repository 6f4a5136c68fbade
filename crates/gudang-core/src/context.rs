//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use http::Method;

use crate::lifecycle::{LivenessToken, TimingContext};

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:04x}", nanos, seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracted route parameters (e.g., `:productId` from `/produk/:productId`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// Typed request context passed to page handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Extracted route parameters.
    pub params: RouteParams,
    /// Decoded query string parameters.
    pub query: QueryParams,
    /// HTTP headers.
    pub headers: Headers,
    /// Timing context for observability.
    pub timing: TimingContext,
    /// Cancelled once the response can no longer be delivered.
    pub liveness: LivenessToken,
}

impl RequestContext {
    /// Create a context from a raw `path?query` string.
    pub fn new(method: Method, path_with_query: &str) -> Self {
        let (path, query) = match path_with_query.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (path_with_query, HashMap::new()),
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path: normalize_path(path),
            params: HashMap::new(),
            query,
            headers: HashMap::new(),
            timing: TimingContext::new(),
            liveness: LivenessToken::new(),
        }
    }

    /// Attach request headers.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Get a route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Get a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Parse `a=1&b=two+words` into decoded pairs. Later duplicates win.
pub fn parse_query(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Percent-decode a form-encoded component, treating `+` as a space.
pub fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Drop a trailing slash so `/katalog/` routes like `/katalog`.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_splits_path_and_query() {
        let ctx = RequestContext::new(Method::GET, "/katalog?q=boxer+pro&sort=price-asc");
        assert_eq!(ctx.path, "/katalog");
        assert_eq!(ctx.query_param("q"), Some("boxer pro"));
        assert_eq!(ctx.query_param("sort"), Some("price-asc"));
    }

    #[test]
    fn test_query_values_are_percent_decoded() {
        let query = parse_query("q=celana%20dalam&empty=&flag");
        assert_eq!(query.get("q").map(String::as_str), Some("celana dalam"));
        assert_eq!(query.get("empty").map(String::as_str), Some(""));
        assert_eq!(query.get("flag").map(String::as_str), Some(""));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        assert_eq!(RequestContext::new(Method::GET, "/katalog/").path, "/katalog");
        assert_eq!(RequestContext::new(Method::GET, "/").path, "/");
        assert_eq!(RequestContext::new(Method::GET, "").path, "/");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("Accept-Language".to_string(), "id-ID".to_string());
        let ctx = RequestContext::new(Method::GET, "/").with_headers(headers);
        assert_eq!(ctx.header("accept-language"), Some("id-ID"));
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }
}
