use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Project, service::ProjectService, types::ProjectCreateRequest};
use crate::auth::AuthenticatedUser;
use crate::shared::{AppError, AppState};

/// HTTP handler for listing all projects
///
/// GET /api/projects
#[instrument(name = "list_projects", skip(state))]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let service = ProjectService::new(Arc::clone(&state.project_repository));
    let projects = service.list_projects().await?;

    info!(project_count = projects.len(), "Projects listed successfully");

    Ok(Json(projects))
}

/// HTTP handler for creating a project. Requires a bearer token.
///
/// POST /api/projects
/// Returns the stored project with its generated id
#[instrument(name = "create_project", skip(state, user, request))]
pub async fn create_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<ProjectCreateRequest>,
) -> Result<Json<Project>, AppError> {
    info!(username = %user.username, title = %request.title, "Creating new project");

    let service = ProjectService::new(Arc::clone(&state.project_repository));
    let project = service.create_project(request).await?;

    Ok(Json(project))
}

/// HTTP handler for deleting a project. Requires a bearer token.
///
/// DELETE /api/projects/:id
/// Succeeds with no content whether or not the project existed
#[instrument(name = "delete_project", skip(state, user))]
pub async fn delete_project(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(project_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    info!(username = %user.username, project_id, "Deleting project");

    let service = ProjectService::new(Arc::clone(&state.project_repository));
    service.delete_project(project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
