//! Route Table
//!
//! Ordered list of pattern → view entries. Resolution walks the entries in
//! registration order and falls back to [`View::NotFound`] when nothing
//! matches, so every path resolves to some view.

use serde::Serialize;
use std::sync::OnceLock;

use super::error::{RouteError, RouteResult};
use super::pattern::{Params, RoutePattern};
use super::view::View;

/// A single registered route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub pattern: RoutePattern,
    pub view: View,
}

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// Normalized path that was resolved
    pub path: String,
    /// Pattern that matched, `None` for the not-found fallback
    pub pattern: Option<String>,
    /// View to render
    pub view: View,
    /// Captured parameters, forwarded to the view as props
    pub params: Params,
}

impl RouteMatch {
    /// A route parameter forwarded to the view
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn is_not_found(&self) -> bool {
        self.view.is_not_found()
    }
}

/// Static mapping from URL paths to views
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// An empty table; every path resolves to [`View::NotFound`]
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's route table
    pub fn standard() -> RouteResult<Self> {
        Self::new()
            .route("/", View::Home)?
            .route("/about", View::About)?
            .route("/skills", View::Skills)?
            .route("/projects", View::Projects)?
            .route("/projects/:id", View::ProjectDetails)?
            .route("/contact", View::Contact)
    }

    /// Process-wide instance of [`RouteTable::standard`]
    pub fn global() -> &'static RouteTable {
        static TABLE: OnceLock<RouteTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            // The standard patterns are literals checked by the tests below.
            Self::standard().unwrap_or_else(|e| panic!("standard route table is invalid: {}", e))
        })
    }

    /// Register a route, rejecting a pattern that is already present
    pub fn route(mut self, pattern: &str, view: View) -> RouteResult<Self> {
        let pattern = RoutePattern::parse(pattern)?;
        if self.routes.iter().any(|r| r.pattern == pattern) {
            return Err(RouteError::DuplicatePattern(pattern.to_string()));
        }
        self.routes.push(Route { pattern, view });
        Ok(self)
    }

    /// Registered routes in resolution order
    pub fn entries(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a URL path (query string and fragment allowed) to a view
    pub fn resolve(&self, raw: &str) -> RouteMatch {
        let path = normalize_path(raw);

        for route in &self.routes {
            if let Some(params) = route.pattern.matches(&path) {
                tracing::debug!(path = %path, pattern = %route.pattern, view = %route.view, "Route matched");
                return RouteMatch {
                    path,
                    pattern: Some(route.pattern.to_string()),
                    view: route.view,
                    params,
                };
            }
        }

        tracing::debug!(path = %path, "No route matched, using not-found view");
        RouteMatch {
            path,
            pattern: None,
            view: View::NotFound,
            params: Params::new(),
        }
    }

    /// Build a link to a view; the first route registered for it wins
    pub fn path_for(&self, view: View, params: &Params) -> Option<String> {
        self.routes
            .iter()
            .find(|r| r.view == view)
            .and_then(|r| r.pattern.href(params).ok())
    }
}

/// Strip query string and fragment, collapse duplicate and trailing slashes
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(|c: char| c == '?' || c == '#').unwrap_or(raw.len());
    let path = &raw[..end];

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return "/".to_string();
    }

    let mut normalized = String::with_capacity(path.len());
    for segment in segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    normalized
}
