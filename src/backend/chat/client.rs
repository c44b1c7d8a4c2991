//! Completion Client
//!
//! The completion service is an external collaborator: it takes a role-tagged
//! message list and returns a single text reply, failing with a generic
//! upstream-error signal. The default adapter speaks the OpenAI
//! chat-completions API over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::chat::ChatMessage;

/// Upstream completion failure
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("completion API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion response contained no choices")]
    EmptyResponse,
}

/// Port for the language-model completion call
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Request a single text reply for the given message list
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

/// Configuration for the OpenAI adapter
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// OpenAI chat-completions adapter
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let request = OpenAiRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
        };

        tracing::debug!("Sending completion request for model {}", request.model);

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Completion API error: {status} - {message}");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::EmptyResponse)?;

        Ok(choice.message.content)
    }
}

// OpenAI API wire types

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: String,
}
