//! Todo entity model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// DTO for creating a new todo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `false` if omitted.
    pub completed: Option<bool>,
}

/// DTO for updating an existing todo. All fields are optional.
///
/// Fields absent from the request body are left unchanged. `description`
/// distinguishes "absent" (`None`) from an explicit JSON `null`
/// (`Some(None)`), which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

/// Deserialize a field that was present in the input, keeping `null` as
/// `Some(None)`. Combined with `#[serde(default)]`, an absent field stays
/// `None`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
