//! HTTP API contract tests
//!
//! Drives the assembled router against the in-memory store and a stubbed
//! completion client, asserting the exact success and failure bodies of
//! every endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use speechcoach::backend::chat::{CompletionClient, CompletionError};
use speechcoach::backend::connections::ConnectionRegistry;
use speechcoach::backend::messaging::ThreadedMessageLog;
use speechcoach::backend::routes::create_router;
use speechcoach::backend::server::state::AppState;
use speechcoach::backend::store::{
    ConnectionStore, InMemoryStore, MessageStore, StoreError,
};
use speechcoach::shared::chat::ChatMessage;
use speechcoach::shared::messaging::{Connection, NewThreadMessage, ThreadMessage};

/// Completion client returning a canned reply
struct CannedCompletion;

#[async_trait]
impl CompletionClient for CannedCompletion {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        // The handler must prepend the system prompt before the user message
        assert_eq!(messages.len(), 2);
        Ok("Try emphasizing the second syllable.".to_string())
    }
}

/// Completion client that always fails upstream
struct FailingCompletion;

#[async_trait]
impl CompletionClient for FailingCompletion {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, CompletionError> {
        Err(CompletionError::Api {
            status: 500,
            message: "upstream down".to_string(),
        })
    }
}

/// Store that rejects every call
struct FailingStore;

#[async_trait]
impl ConnectionStore for FailingStore {
    async fn upsert(&self, _connection: &Connection) -> Result<(), StoreError> {
        Err(StoreError::Backend("store unavailable".to_string()))
    }

    async fn find_by_client(&self, _user_id: &str) -> Result<Vec<Connection>, StoreError> {
        Err(StoreError::Backend("store unavailable".to_string()))
    }

    async fn find_by_therapist(&self, _user_id: &str) -> Result<Vec<Connection>, StoreError> {
        Err(StoreError::Backend("store unavailable".to_string()))
    }
}

#[async_trait]
impl MessageStore for FailingStore {
    async fn append(
        &self,
        _thread_id: &str,
        _message: &NewThreadMessage,
    ) -> Result<(), StoreError> {
        Err(StoreError::Backend("store unavailable".to_string()))
    }

    async fn list_thread(&self, _thread_id: &str) -> Result<Vec<ThreadMessage>, StoreError> {
        Err(StoreError::Backend("store unavailable".to_string()))
    }
}

fn app_with(store: Arc<InMemoryStore>, chat: Arc<dyn CompletionClient>) -> Router {
    let state = AppState {
        connections: ConnectionRegistry::new(store.clone()),
        messages: ThreadedMessageLog::new(store),
        chat,
    };
    create_router(state, vec!["http://localhost:3000".to_string()])
}

fn failing_app() -> Router {
    let store = Arc::new(FailingStore);
    let state = AppState {
        connections: ConnectionRegistry::new(store.clone()),
        messages: ThreadedMessageLog::new(store),
        chat: Arc::new(FailingCompletion),
    };
    create_router(state, vec![])
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_is_live() {
    let app = app_with(Arc::new(InMemoryStore::new()), Arc::new(CannedCompletion));

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Speech coach backend is live and ready!");
}

#[tokio::test]
async fn add_connection_returns_fixed_confirmation() {
    let app = app_with(Arc::new(InMemoryStore::new()), Arc::new(CannedCompletion));

    let response = app
        .oneshot(post_json(
            "/add-connection",
            serde_json::json!({"clientId": "c1", "therapistId": "t1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({"message": "Connection request sent."}));
}

#[tokio::test]
async fn get_connections_merges_both_roles() {
    let store = Arc::new(InMemoryStore::new());
    let app = app_with(store, Arc::new(CannedCompletion));

    for (client, therapist) in [("a", "b"), ("c", "a")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/add-connection",
                serde_json::json!({"clientId": client, "therapistId": therapist}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(get("/get-connections/a")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let connections = body["connections"].as_array().unwrap();
    assert_eq!(connections.len(), 2);

    let response = app.oneshot(get("/get-connections/z")).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["connections"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn send_message_lands_in_symmetric_thread() {
    let store = Arc::new(InMemoryStore::new());
    let app = app_with(store.clone(), Arc::new(CannedCompletion));

    for (sender, receiver, text) in [("alice", "bob", "hello"), ("bob", "alice", "hi back")] {
        let response = app
            .clone()
            .oneshot(post_json(
                "/send-message",
                serde_json::json!({
                    "senderId": sender,
                    "receiverId": receiver,
                    "message": text,
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body, serde_json::json!({"message": "Message sent."}));
    }

    // Both directions share the single "alice_bob" thread, in write order
    let messages = store.list_thread("alice_bob").await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].message, "hello");
    assert_eq!(messages[1].message, "hi back");
    assert!(store.list_thread("bob_alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn chat_relays_completion_reply() {
    let app = app_with(Arc::new(InMemoryStore::new()), Arc::new(CannedCompletion));

    let response = app
        .oneshot(post_json(
            "/chat",
            serde_json::json!({"message": "How do I pronounce 'thorough'?"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({"reply": "Try emphasizing the second syllable."})
    );
}

#[tokio::test]
async fn store_failures_yield_fixed_error_bodies() {
    let cases = [
        (
            post_json(
                "/add-connection",
                serde_json::json!({"clientId": "c1", "therapistId": "t1"}),
            ),
            "Could not add connection",
        ),
        (get("/get-connections/c1"), "Could not fetch connections"),
        (
            post_json(
                "/send-message",
                serde_json::json!({"senderId": "a", "receiverId": "b", "message": "hi"}),
            ),
            "Could not send message",
        ),
        (
            post_json("/chat", serde_json::json!({"message": "hi"})),
            "Something went wrong with OpenAI API",
        ),
    ];

    for (request, expected_error) in cases {
        let response = failing_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body, serde_json::json!({"error": expected_error}));
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = app_with(Arc::new(InMemoryStore::new()), Arc::new(CannedCompletion));
    let response = app.oneshot(get("/no-such-route")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
