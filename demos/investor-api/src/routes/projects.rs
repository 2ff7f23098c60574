use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use sair_reit_sdk::models::{NewProject, Project, ProjectUpdate};
use sair_reit_sdk::CriteriaParams;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/projects?search=tower&status=funding&roi=15%2B&sort=roi-high
///
/// List projects through the listings filter. Every parameter is optional.
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CriteriaParams>,
) -> Result<Json<Value>, AppError> {
    let projects = state
        .sdk
        .run(move |s| s.projects().search_params(&params))
        .await?;

    let count = projects.len();
    Ok(Json(json!({ "data": projects, "count": count })))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let project = state.sdk.run(move |s| s.projects().get(id)).await?;

    match project {
        Some(p) => Ok(Json(json!({ "data": p }))),
        None => Err(AppError::not_found("Project not found")),
    }
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project = state.sdk.run(move |s| s.projects().create(payload)).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PATCH /api/projects/:id
///
/// Partial update; omitted fields keep their stored values.
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<ProjectUpdate>,
) -> Result<Json<Project>, AppError> {
    let project = state
        .sdk
        .run(move |s| s.projects().update(id, update))
        .await?;
    Ok(Json(project))
}
