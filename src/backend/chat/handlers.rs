//! Chat HTTP Handler
//!
//! Relays the user's message to the completion service with the fixed
//! speech-coach system prompt and returns the single reply.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::backend::chat::CompletionClient;
use crate::backend::error::BackendError;
use crate::shared::chat::{ChatMessage, ChatRequest, ChatResponse};

/// System prompt prepended to every relayed message
pub const SPEECH_COACH_PROMPT: &str = "You are a speech coach helping improve pronunciation.";

/// Relay a chat message to the completion service
pub async fn chat(
    State(client): State<Arc<dyn CompletionClient>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, BackendError> {
    let messages = vec![
        ChatMessage::system(SPEECH_COACH_PROMPT),
        ChatMessage::user(request.message),
    ];

    let reply = client.complete(&messages).await.map_err(|e| {
        tracing::error!("Completion request failed: {e}");
        BackendError::Completion(e)
    })?;

    Ok(Json(ChatResponse { reply }))
}
