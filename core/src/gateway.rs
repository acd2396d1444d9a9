//! Remote todo gateway: the four CRUD calls as async operations.
//!
//! # Design
//! `TodoGateway` is the seam the controller depends on. `HttpGateway` is the
//! real implementation: it asks `TodoClient` for a request, hands it to a
//! `Transport`, and parses the response. One call, one request. No retry,
//! no timeout override, no deduplication.
//!
//! Futures are `?Send`; everything runs on one event loop.

use async_trait::async_trait;

use crate::client::TodoClient;
use crate::error::GatewayError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoId};

/// Executes one HTTP round-trip. Non-2xx statuses are returned as data, not
/// as errors; only a missing response is an `Err`.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError>;
}

#[async_trait(?Send)]
pub trait TodoGateway {
    async fn list(&self) -> Result<Vec<Todo>, GatewayError>;
    async fn create(&self, todo: &NewTodo) -> Result<Todo, GatewayError>;
    async fn update(&self, todo: &Todo) -> Result<Todo, GatewayError>;
    async fn delete(&self, id: &TodoId) -> Result<(), GatewayError>;
}

#[derive(Debug, Clone)]
pub struct HttpGateway<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> HttpGateway<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }
}

#[async_trait(?Send)]
impl<T: Transport> TodoGateway for HttpGateway<T> {
    async fn list(&self) -> Result<Vec<Todo>, GatewayError> {
        let response = self.transport.execute(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    async fn create(&self, todo: &NewTodo) -> Result<Todo, GatewayError> {
        let request = self.client.build_create_todo(todo)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_todo(response)
    }

    async fn update(&self, todo: &Todo) -> Result<Todo, GatewayError> {
        let request = self.client.build_update_todo(todo)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_todo(response)
    }

    async fn delete(&self, id: &TodoId) -> Result<(), GatewayError> {
        let response = self.transport.execute(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }
}
