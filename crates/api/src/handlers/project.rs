//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use futures::future::try_join_all;
use tracker_core::error::CoreError;
use tracker_db::models::project::{
    CreateProject, Project, ProjectWithTaskCount, UpdateProject,
};
use tracker_db::{Store, StoreResult};

use crate::error::AppResult;
use crate::handlers::record_id;
use crate::middleware::json::ValidJson;
use crate::response::{DataResponse, Empty};
use crate::state::AppState;

const ENTITY: &str = "Project";

/// Attach the number of tasks referencing `project`.
async fn with_task_count(
    store: &dyn Store,
    project: Project,
) -> StoreResult<ProjectWithTaskCount> {
    let task_count = store.count_tasks_for_project(project.id).await?;
    Ok(ProjectWithTaskCount {
        project,
        task_count,
    })
}

/// GET /api/projects
///
/// Counts are fetched concurrently; any failure fails the whole response.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithTaskCount>>>> {
    let store = state.store.as_ref();
    let projects = store.list_projects().await?;
    let projects = try_join_all(projects.into_iter().map(|p| with_task_count(store, p))).await?;
    Ok(Json(DataResponse::list(projects)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ProjectWithTaskCount>>> {
    let project_id = record_id(ENTITY, &id)?;
    let project = state
        .store
        .find_project(project_id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    let project = with_task_count(state.store.as_ref(), project).await?;
    Ok(Json(DataResponse::new(project)))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let input = input.validate().map_err(CoreError::from)?;
    let project = state.store.insert_project(&input).await?;
    tracing::info!(project_id = %project.id, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(project))))
}

/// PUT /api/projects/{id}
///
/// Only the supplied fields are validated and changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    let patch = input.validate().map_err(CoreError::from)?;
    let project_id = record_id(ENTITY, &id)?;
    let project = state
        .store
        .update_project(project_id, &patch)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse::new(project)))
}

/// DELETE /api/projects/{id}
///
/// Tasks referencing the project are left in place.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Empty>>> {
    let project_id = record_id(ENTITY, &id)?;
    state
        .store
        .delete_project(project_id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(%project_id, "Project deleted");
    Ok(Json(DataResponse::new(Empty::default())))
}
