//! Domain DTOs for the todo API.
//!
//! # Design
//! A saved item and an unsaved item are different types: `Todo` always
//! carries the server-assigned `TodoId`, `NewTodo` never does. The wire shape
//! is `{ id?, description, dueDate, priority }`; text fields the server omits
//! deserialize as empty strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a stored todo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A todo as stored by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    #[serde(default)]
    pub description: String,
    /// Date kept as the text the server sent, e.g. `2026-10-18`.
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
}

/// Request payload for creating a todo. The server assigns the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
}

impl NewTodo {
    /// Attach an identifier, producing the saved form of this item.
    pub fn with_id(self, id: TodoId) -> Todo {
        Todo {
            id,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
        }
    }
}
