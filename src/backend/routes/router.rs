/**
 * Router Configuration
 *
 * Assembles all HTTP routes into a single Axum router with the CORS
 * allow-list applied.
 *
 * # Routes
 *
 * - `GET /` - liveness line
 * - `POST /chat` - relay a message to the completion service
 * - `POST /add-connection` - create a pending client/therapist connection
 * - `GET /get-connections/{userId}` - connections for a user, either role
 * - `POST /send-message` - append a message to the pair's thread
 *
 * Unknown routes fall through to a 404 handler.
 */
use axum::{
    http::{header, request::Parts, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::backend::chat::handlers::chat;
use crate::backend::connections::handlers::{add_connection, get_connections};
use crate::backend::messaging::handlers::send_message;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origins: Vec<String>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|origin| allowed_origins.iter().any(|allowed| allowed == origin))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .route("/", get(health))
        .route("/chat", post(chat))
        .route("/add-connection", post(add_connection))
        .route("/get-connections/{user_id}", get(get_connections))
        .route("/send-message", post(send_message))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(cors)
        .with_state(app_state)
}

/// Health check
async fn health() -> &'static str {
    "Speech coach backend is live and ready!"
}
