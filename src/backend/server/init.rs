/**
 * Server Initialization
 *
 * Assembles the Axum application: store backend selection, component
 * construction and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the database pool (PostgreSQL if `DATABASE_URL` is set)
 * 2. Pick the store backend - PostgreSQL, or in-memory as a fallback
 * 3. Build the connection registry, message log and completion client
 * 4. Create the router with CORS and all routes
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing or unreachable database downgrades
 * to the in-memory store, and a completion client that fails to construct is
 * replaced with one that reports the upstream failure on use. The server
 * always starts.
 */
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use crate::backend::chat::{CompletionClient, CompletionError, OpenAiClient};
use crate::backend::connections::ConnectionRegistry;
use crate::backend::messaging::ThreadedMessageLog;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{ConnectionStore, InMemoryStore, MessageStore, PgConnectionStore, PgMessageStore};
use crate::shared::chat::ChatMessage;

/// Stand-in completion client used when the real one fails to construct
struct UnavailableCompletion;

#[async_trait]
impl CompletionClient for UnavailableCompletion {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, CompletionError> {
        Err(CompletionError::Network(
            "completion client unavailable".to_string(),
        ))
    }
}

/// Create and configure the Axum application
pub async fn create_app(config: ServerConfig) -> Router {
    tracing::info!("Initializing speechcoach backend server");

    // Step 1: pick the store backend
    let (connection_store, message_store): (Arc<dyn ConnectionStore>, Arc<dyn MessageStore>) =
        match load_database(&config).await {
            Some(pool) => (
                Arc::new(PgConnectionStore::new(pool.clone())),
                Arc::new(PgMessageStore::new(pool)),
            ),
            None => {
                tracing::warn!("Using in-memory store; data will not survive restarts");
                let store = Arc::new(InMemoryStore::new());
                (store.clone(), store)
            }
        };

    // Step 2: build the components
    let connections = ConnectionRegistry::new(connection_store);
    let messages = ThreadedMessageLog::new(message_store);

    let chat: Arc<dyn CompletionClient> = match OpenAiClient::new(config.openai.clone()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to initialize completion client: {e}");
            Arc::new(UnavailableCompletion)
        }
    };

    // Step 3: assemble state and routes
    let app_state = AppState {
        connections,
        messages,
        chat,
    };

    let app = create_router(app_state, config.allowed_origins);
    tracing::info!("Router configured");

    app
}
