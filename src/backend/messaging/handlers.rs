//! Messaging HTTP Handlers
//!
//! Handler for the `/send-message` endpoint. A store failure maps to the
//! fixed 500 error; no partial document becomes visible.

use axum::{extract::State, Json};

use crate::backend::error::BackendError;
use crate::backend::messaging::ThreadedMessageLog;
use crate::shared::messaging::{SendMessageRequest, SendMessageResponse};

/// Append a message to the sender/receiver thread
pub async fn send_message(
    State(log): State<ThreadedMessageLog>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, BackendError> {
    log.send_message(&request.sender_id, &request.receiver_id, &request.message)
        .await
        .map_err(|e| {
            tracing::error!("Failed to send message: {e}");
            BackendError::SendMessage(e)
        })?;

    Ok(Json(SendMessageResponse {
        message: "Message sent.".to_string(),
    }))
}
