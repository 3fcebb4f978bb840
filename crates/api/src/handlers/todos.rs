//! Handlers for the todo CRUD endpoints.
//!
//! Each handler performs exactly one repository operation and serializes
//! the resulting row(s) directly as the response body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /todos
///
/// List all todos in insertion order.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = TodoRepo::list(&state.pool).await?;

    Ok(Json(todos))
}

/// POST /todos
///
/// Create a new todo. `completed` defaults to `false` when omitted.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/{id}
///
/// Fetch a single todo by ID.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::find_by_id(&state.pool, todo_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Todo",
            id: todo_id,
        }))?;

    Ok(Json(todo))
}

/// PUT /todos/{id}
///
/// Partially update a todo. Only fields present in the body are applied;
/// an explicit `"description": null` clears the field.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::update(&state.pool, todo_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Todo",
            id: todo_id,
        }))?;

    tracing::info!(todo_id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /todos/{id}
///
/// Permanently delete a todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TodoRepo::delete(&state.pool, todo_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Todo",
            id: todo_id,
        }));
    }

    tracing::info!(todo_id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
