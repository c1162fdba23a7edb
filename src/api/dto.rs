//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::catalog::Project;
use crate::router::{Route, RouteMatch};

// ============================================
// PROJECT DTOs
// ============================================

/// Project list response
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    /// Projects in listing order
    pub projects: &'static [Project],
    /// Number of projects
    pub count: usize,
}

// ============================================
// ROUTE DTOs
// ============================================

/// One entry of the route table
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    /// Path pattern, e.g. `/projects/:id`
    pub pattern: String,
    /// View rendered for the pattern
    pub view: String,
    /// Parameters captured by the pattern and forwarded to the view
    pub params: Vec<String>,
}

impl From<&Route> for RouteEntry {
    fn from(route: &Route) -> Self {
        Self {
            pattern: route.pattern.to_string(),
            view: route.view.name().to_string(),
            params: route.pattern.param_names().map(str::to_string).collect(),
        }
    }
}

/// Route table response
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Declared routes in resolution order
    pub routes: Vec<RouteEntry>,
    /// View used when no route matches
    pub fallback: String,
}

/// Resolve query parameters
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    /// Path to resolve, may include query string and fragment
    pub path: String,
}

/// Resolve response
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// Route match for the path
    #[serde(flatten)]
    pub matched: RouteMatch,
    /// Project referenced by the `id` prop, if the view takes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<&'static Project>,
    /// False when the path renders a not-found state
    pub found: bool,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Number of catalog entries
    pub projects: usize,
    /// Number of declared routes
    pub routes: usize,
    /// Where the application shell was loaded from
    pub shell: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server start time (RFC 3339)
    pub started_at: String,
    /// Application version
    pub version: String,
}
