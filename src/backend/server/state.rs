/**
 * Application State Management
 *
 * `AppState` is the central state container for the Axum application. Each
 * request handler extracts only the component it needs via `FromRef`.
 *
 * # Thread Safety
 *
 * The registry and message log are stateless facades over `Arc`-shared store
 * capabilities, and the completion client is behind an `Arc`, so cloning the
 * state per request is cheap and no locking happens in this layer.
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::chat::CompletionClient;
use crate::backend::connections::ConnectionRegistry;
use crate::backend::messaging::ThreadedMessageLog;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Connection registry over the connection store
    pub connections: ConnectionRegistry,

    /// Threaded message log over the message store
    pub messages: ThreadedMessageLog,

    /// Completion client for the chat relay
    pub chat: Arc<dyn CompletionClient>,
}

impl FromRef<AppState> for ConnectionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.connections.clone()
    }
}

impl FromRef<AppState> for ThreadedMessageLog {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.messages.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CompletionClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat.clone()
    }
}
