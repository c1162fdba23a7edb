//! Site Routes
//!
//! Introspection of the front-end route table.
//!
//! - GET /api/v1/routes - List declared routes
//! - GET /api/v1/resolve?path=... - Resolve a path to its view

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ResolveParams, ResolveResponse, RouteEntry, RoutesResponse};
use crate::api::state::AppState;
use crate::catalog::Catalog;
use crate::router::{RouteMatch, View};

/// GET /api/v1/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        routes: state.routes.entries().iter().map(RouteEntry::from).collect(),
        fallback: View::NotFound.name().to_string(),
    })
}

/// GET /api/v1/resolve?path=/projects/0
pub async fn resolve_path(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveParams>,
) -> Json<ResolveResponse> {
    let matched = state.routes.resolve(&params.path);
    Json(describe(state.catalog, matched))
}

/// Attach the referenced project and decide whether the page exists
pub fn describe(catalog: Catalog, matched: RouteMatch) -> ResolveResponse {
    let project = match matched.view {
        View::ProjectDetails => matched.param("id").and_then(|id| catalog.lookup(id).ok()),
        _ => None,
    };
    let found = match matched.view {
        View::NotFound => false,
        View::ProjectDetails => project.is_some(),
        _ => true,
    };

    ResolveResponse {
        matched,
        project,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouteTable;

    #[test]
    fn test_describe_project_details() {
        let catalog = Catalog::global();
        let table = RouteTable::global();

        let found = describe(catalog, table.resolve("/projects/1"));
        assert!(found.found);
        assert_eq!(
            found.project.map(|p| p.title),
            Some("Mental Health Journal App")
        );

        let missing = describe(catalog, table.resolve("/projects/999"));
        assert!(!missing.found);
        assert!(missing.project.is_none());
        assert_eq!(missing.matched.view, View::ProjectDetails);
    }

    #[test]
    fn test_describe_static_and_unknown() {
        let catalog = Catalog::global();
        let table = RouteTable::global();

        let about = describe(catalog, table.resolve("/about"));
        assert!(about.found);
        assert!(about.project.is_none());

        assert!(!describe(catalog, table.resolve("/nope")).found);
    }
}
