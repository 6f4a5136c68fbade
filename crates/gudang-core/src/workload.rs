//! Workload definition and route resolution.

use http::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::context::{RequestContext, RouteParams};

/// Workload manifest - explicit configuration for a deployable unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadManifest {
    /// Unique name for this workload.
    pub name: String,
    /// Semantic version.
    pub version: String,
    /// Routes this workload handles.
    pub routes: Vec<RouteConfig>,
}

/// Result of matching a request against a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    /// A route accepted the path and method.
    Found(&'a RouteConfig, RouteParams),
    /// A route matched the path but not the method.
    MethodNotAllowed(&'a RouteConfig),
    /// No route matched the path.
    NotFound,
}

impl WorkloadManifest {
    /// Create a new workload manifest.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            routes: Vec::new(),
        }
    }

    /// Add a route to this workload.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// Find the route for a method and path.
    pub fn resolve(&self, method: &Method, path: &str) -> RouteMatch<'_> {
        let mut path_matched = None;

        for route in &self.routes {
            if let Some(params) = route.match_path(path) {
                if route.accepts(method) {
                    return RouteMatch::Found(route, params);
                }
                path_matched.get_or_insert(route);
            }
        }

        match path_matched {
            Some(route) => RouteMatch::MethodNotAllowed(route),
            None => RouteMatch::NotFound,
        }
    }

    /// Resolve and store the extracted parameters on the context.
    pub fn route_request(&self, ctx: &mut RequestContext) -> Result<String, WorkloadError> {
        match self.resolve(&ctx.method, &ctx.path) {
            RouteMatch::Found(route, params) => {
                ctx.params = params;
                Ok(route.handler.clone())
            }
            RouteMatch::MethodNotAllowed(_) => Err(WorkloadError::MethodNotAllowed(
                ctx.method.to_string(),
            )),
            RouteMatch::NotFound => Err(WorkloadError::RouteNotFound(ctx.path.clone())),
        }
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("Section '{0}' failed: {1}")]
    SectionFailed(String, String),
}

impl WorkloadError {
    /// Status code to answer with when this error happens before headers.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> WorkloadManifest {
        WorkloadManifest::new("storefront", "0.1.0")
            .with_route(RouteConfig::new("/", "home"))
            .with_route(RouteConfig::new("/katalog", "catalog"))
            .with_route(RouteConfig::new("/produk/:productId", "product"))
    }

    #[test]
    fn test_resolve_static_and_param_routes() {
        let manifest = manifest();
        match manifest.resolve(&Method::GET, "/produk/abc%20123") {
            RouteMatch::Found(route, params) => {
                assert_eq!(route.handler, "product");
                assert_eq!(params.get("productId").map(String::as_str), Some("abc 123"));
            }
            other => panic!("unexpected match: {:?}", other),
        }

        assert!(matches!(
            manifest.resolve(&Method::GET, "/katalog"),
            RouteMatch::Found(route, _) if route.handler == "catalog"
        ));
    }

    #[test]
    fn test_unknown_paths_and_methods() {
        let manifest = manifest();
        assert_eq!(manifest.resolve(&Method::GET, "/keranjang"), RouteMatch::NotFound);
        assert_eq!(manifest.resolve(&Method::GET, "/produk"), RouteMatch::NotFound);
        assert_eq!(manifest.resolve(&Method::GET, "/produk/a/b"), RouteMatch::NotFound);
        assert!(matches!(
            manifest.resolve(&Method::POST, "/katalog"),
            RouteMatch::MethodNotAllowed(_)
        ));
    }

    #[test]
    fn test_route_request_fills_params() {
        let manifest = manifest();
        let mut ctx = RequestContext::new(Method::GET, "/produk/p-1?img=2");
        assert_eq!(manifest.route_request(&mut ctx).unwrap(), "product");
        assert_eq!(ctx.param("productId"), Some("p-1"));

        let mut ctx = RequestContext::new(Method::GET, "/nope");
        let err = manifest.route_request(&mut ctx).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
