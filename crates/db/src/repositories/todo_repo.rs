//! Repository for the `todos` table.

use sqlx::SqlitePool;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// If `completed` is `None` in the input, defaults to `false`.
    pub async fn create(pool: &SqlitePool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, completed)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.completed.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all todos in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Update a todo. Only fields present in `input` are applied; a present
    /// `description: null` clears the stored value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        // Load-modify-write: COALESCE cannot express clearing a column, and
        // per-statement commit is all the atomicity this table needs.
        let Some(mut todo) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            todo.title = title.clone();
        }
        if let Some(description) = &input.description {
            todo.description = description.clone();
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }

        let query = format!(
            "UPDATE todos SET title = $2, description = $3, completed = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
