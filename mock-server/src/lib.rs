//! In-memory implementation of the `/api/todos` resource.
//!
//! Items keep insertion order. Ids are UUID v4 strings assigned on create.
//! `PUT` replaces every field of the stored item; the id in the path wins
//! over any id in the body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

/// Body accepted by both `POST` and `PUT`. Any `id` field is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoInput {
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
}

impl TodoInput {
    fn into_todo(self, id: String) -> Todo {
        Todo {
            id,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
        }
    }
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-populated with `todos`.
pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(todos));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let todo = input.into_todo(Uuid::new_v4().to_string());
    info!(id = %todo.id, "created todo");
    db.write().await.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let slot = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = input.into_todo(id);
    info!(id = %slot.id, "updated todo");
    Ok(Json(slot.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    let before = todos.len();
    todos.retain(|t| t.id != id);
    if todos.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case() {
        let todo = Todo {
            id: "1".to_string(),
            description: "Test".to_string(),
            due_date: "2026-10-18".to_string(),
            priority: "low".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["dueDate"], "2026-10-18");
        assert_eq!(json["priority"], "low");
    }

    #[test]
    fn input_defaults_optional_fields() {
        let input: TodoInput = serde_json::from_str(r#"{"description":"Only this"}"#).unwrap();
        assert_eq!(input.description, "Only this");
        assert!(input.due_date.is_empty());
        assert!(input.priority.is_empty());
    }

    #[test]
    fn input_ignores_id_in_body() {
        let input: TodoInput =
            serde_json::from_str(r#"{"id":"spoofed","description":"x"}"#).unwrap();
        assert_eq!(input.into_todo("real".to_string()).id, "real");
    }

    #[test]
    fn input_rejects_missing_description() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"priority":"high"}"#);
        assert!(result.is_err());
    }
}
