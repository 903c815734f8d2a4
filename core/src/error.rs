//! Error types for the bookmarks API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the server signals a missing
//! bookmark with 404 and callers usually want to tell that apart from other
//! failures. Every other non-2xx response lands in `HttpError` with the raw
//! status code and body. Nothing is retried or recovered locally.

use thiserror::Error;

/// Errors returned by `BookmarkClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
