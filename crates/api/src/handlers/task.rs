//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracker_core::error::CoreError;
use tracker_core::types::parse_id;
use tracker_db::models::task::{CreateTask, Task, UpdateTask};

use crate::error::{AppError, AppResult};
use crate::handlers::record_id;
use crate::middleware::json::ValidJson;
use crate::response::{DataResponse, Empty};
use crate::state::AppState;

const ENTITY: &str = "Task";

/// Reported when persisting a new task fails unexpectedly.
const CREATE_FAILED: &str = "Server error";

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = state.store.list_tasks().await?;
    Ok(Json(DataResponse::list(tasks)))
}

/// GET /api/tasks/project/{project_id}
///
/// The project itself is not looked up: an unknown (or malformed) project id
/// yields an empty list, same as a project without tasks.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = match parse_id(&project_id) {
        Some(project_id) => state.store.list_tasks_by_project(project_id).await?,
        None => Vec::new(),
    };
    Ok(Json(DataResponse::list(tasks)))
}

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Task>>> {
    let task_id = record_id(ENTITY, &id)?;
    let task = state
        .store
        .find_task(task_id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse::new(task)))
}

/// POST /api/tasks
///
/// Unexpected failures are answered with a fixed message and never carry
/// detail, even in development.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateTask>,
) -> AppResult<(StatusCode, Json<DataResponse<Task>>)> {
    let input = input.validate().map_err(CoreError::from)?;
    let task = state.store.insert_task(&input).await.map_err(|err| {
        tracing::error!(error = %err, "Task creation failed");
        AppError::Opaque(CREATE_FAILED)
    })?;
    tracing::info!(task_id = %task.id, project_id = ?task.project_id, "Task created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(task))))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<UpdateTask>,
) -> AppResult<Json<DataResponse<Task>>> {
    let patch = input.validate().map_err(CoreError::from)?;
    let task_id = record_id(ENTITY, &id)?;
    let task = state
        .store
        .update_task(task_id, &patch)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(Json(DataResponse::new(task)))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Empty>>> {
    let task_id = record_id(ENTITY, &id)?;
    state
        .store
        .delete_task(task_id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    tracing::info!(%task_id, "Task deleted");
    Ok(Json(DataResponse::new(Empty::default())))
}
