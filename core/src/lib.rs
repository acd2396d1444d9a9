//! Client core for a remote TODO list.
//!
//! # Overview
//! A `TodoController` keeps a filtered, paginated view of the todos stored
//! behind `/api/todos` and drives create/update/delete through a
//! `TodoGateway`. After every successful mutation it reloads the whole
//! collection from the server; the local copy is only a cache.
//!
//! # Design
//! - `TodoClient` builds `HttpRequest`s and parses `HttpResponse`s without
//!   touching the network; a `Transport` supplied by the host does the I/O.
//! - `HttpGateway` glues the two together behind the async `TodoGateway`
//!   trait, which is also the seam tests replace.
//! - `TodoView` is pure state: filter, pagination, form buffer, `ViewMode`.
//! - Everything runs on a single event loop; futures are not `Send`.

pub mod client;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod http;
pub mod notify;
pub mod types;
pub mod view;

pub use client::{TodoClient, DEFAULT_BASE_URL, RESOURCE_PATH};
pub use controller::TodoController;
pub use error::{ControllerError, GatewayError};
pub use gateway::{HttpGateway, TodoGateway, Transport};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notify::{Confirmation, Notice, Notifier};
pub use types::{NewTodo, Todo, TodoId};
pub use view::{FilterField, TodoForm, TodoView, ViewMode, PAGE_SIZE};
