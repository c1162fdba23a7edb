//! Page Routes
//!
//! History-mode hosting for the front-end: every page path is answered with
//! the application shell, and the route table decides the status code.
//! Paths that render a not-found state (no matching route, or a project id
//! missing from the catalog) still get the shell so the front-end can show
//! its not-found view, but with a 404 status for crawlers and link checkers.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use super::site::describe;
use crate::api::state::AppState;

/// Fallback handler for every path not served by the API or static files
pub async fn serve_page(State(state): State<Arc<AppState>>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let matched = state.routes.resolve(uri.path());
    let page = describe(state.catalog, matched);

    let status = if page.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    tracing::debug!(
        path = %page.matched.path,
        view = %page.matched.view,
        status = status.as_u16(),
        "Serving page"
    );

    (status, Html(state.shell.html.clone())).into_response()
}
