//! Project Routes
//!
//! Read-only access to the project catalog.
//!
//! - GET /api/v1/projects - List all projects
//! - GET /api/v1/projects/:id - Get a single project

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ProjectListResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::catalog::Project;

/// GET /api/v1/projects
pub async fn list_projects(State(state): State<Arc<AppState>>) -> Json<ProjectListResponse> {
    let projects = state.catalog.all();
    Json(ProjectListResponse {
        projects,
        count: projects.len(),
    })
}

/// GET /api/v1/projects/:id
///
/// The id is taken as a raw string so a non-numeric id is reported as a
/// validation error rather than a generic extractor rejection.
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<&'static Project>> {
    let project = state.catalog.lookup(&id)?;
    Ok(Json(project))
}
