//! Backend Error Types
//!
//! One variant per failing operation. The display string of each variant is
//! the exact user-visible message for that endpoint; the underlying cause is
//! kept as the error source for logging but never leaks into the response.

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::chat::CompletionError;
use crate::backend::store::StoreError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection upsert failed
    #[error("Could not add connection")]
    AddConnection(#[source] StoreError),

    /// One of the two role queries in the connection fan-out failed
    #[error("Could not fetch connections")]
    FetchConnections(#[source] StoreError),

    /// Message append failed
    #[error("Could not send message")]
    SendMessage(#[source] StoreError),

    /// The completion service call failed
    #[error("Something went wrong with OpenAI API")]
    Completion(#[source] CompletionError),
}

impl BackendError {
    /// HTTP status code for this error
    ///
    /// All upstream failures are surfaced as generic 500-class errors with no
    /// structured error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AddConnection(_)
            | Self::FetchConnections(_)
            | Self::SendMessage(_)
            | Self::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The fixed user-visible message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
