use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::ApiState;
use taskboard_core::{Task, TaskPatch};

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// List all tasks in insertion order
pub async fn list_tasks(State(state): State<ApiState>) -> Json<Vec<Task>> {
    Json(state.registry.list().await)
}

/// Get a task by id
pub async fn get_task(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    match state.registry.get(id).await {
        Some(task) => Ok(Json(task)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Task not found: {}", id),
            }),
        )),
    }
}

/// Create a task; every field is optional, `completed` defaults to false
pub async fn create_task(
    State(state): State<ApiState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Json<Task> {
    let task = state
        .registry
        .create(
            payload.title,
            payload.description,
            payload.completed.unwrap_or(false),
        )
        .await;

    Json(task)
}

/// Apply a partial update; only fields present in the body are touched
pub async fn update_task(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, (StatusCode, Json<ErrorResponse>)> {
    match state.registry.update(id, patch).await {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// Delete a task; the confirmation is returned whether or not it existed
pub async fn delete_task(State(state): State<ApiState>, Path(id): Path<u64>) -> String {
    state.registry.remove(id).await;
    format!("Task with ID {} deleted.", id)
}
