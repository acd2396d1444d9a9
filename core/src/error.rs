//! Error types for the todo client core.
//!
//! # Design
//! Every `GatewayError` variant is a remote failure: the controller never
//! branches on which one it got, it logs and keeps its state. The variants
//! exist so the log line says what actually went wrong. `ControllerError`
//! adds the one failure the controller can detect on its own.

use thiserror::Error;

/// A failed round-trip to the todo API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors returned by `TodoController` actions.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// `submit_edit` was called while no item was open for editing.
    #[error("no todo is open for editing")]
    NoEditTarget,
}
