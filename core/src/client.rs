//! Stateless HTTP request builder and response parser for `/api/todos`.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`, so the wire format is testable without
//! a network.

use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoId};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const RESOURCE_PATH: &str = "/api/todos";

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl Default for TodoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{RESOURCE_PATH}", self.base_url)
    }

    fn item_url(&self, id: &TodoId) -> String {
        format!("{}{RESOURCE_PATH}/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.collection_url())
    }

    pub fn build_create_todo(&self, todo: &NewTodo) -> Result<HttpRequest, GatewayError> {
        let body = serde_json::to_string(todo).map_err(GatewayError::Encode)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    /// The target URL comes from `todo.id`; the full item is sent as the body.
    pub fn build_update_todo(&self, todo: &Todo) -> Result<HttpRequest, GatewayError> {
        let body = serde_json::to_string(todo).map_err(GatewayError::Encode)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(&todo.id), body))
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, GatewayError> {
        decode(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, GatewayError> {
        decode(response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, GatewayError> {
        decode(response)
    }

    /// Any body the server sends back is ignored.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), GatewayError> {
        check_status(&response)
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, GatewayError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(GatewayError::Decode)
}

/// Map non-2xx status codes to the appropriate `GatewayError` variant.
fn check_status(response: &HttpResponse) -> Result<(), GatewayError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(GatewayError::NotFound);
    }
    Err(GatewayError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
