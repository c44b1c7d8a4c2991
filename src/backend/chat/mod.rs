//! Chat Module
//!
//! Relays user messages to a language-model completion service.
//!
//! - **`client`** - The `CompletionClient` port and its OpenAI adapter
//! - **`handlers`** - HTTP handler for `/chat`

pub mod client;
pub mod handlers;

pub use client::{CompletionClient, CompletionError, OpenAiClient, OpenAiConfig};
