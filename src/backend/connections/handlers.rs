//! Connection HTTP Handlers
//!
//! Handlers for the `/add-connection` and `/get-connections/{userId}`
//! endpoints. Any store failure maps to the endpoint's fixed 500 error.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::connections::ConnectionRegistry;
use crate::backend::error::BackendError;
use crate::shared::messaging::{
    AddConnectionRequest, AddConnectionResponse, ListConnectionsResponse,
};

/// Create a pending connection between a client and a therapist
pub async fn add_connection(
    State(registry): State<ConnectionRegistry>,
    Json(request): Json<AddConnectionRequest>,
) -> Result<Json<AddConnectionResponse>, BackendError> {
    registry
        .create_connection(&request.client_id, &request.therapist_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add connection: {e}");
            BackendError::AddConnection(e)
        })?;

    Ok(Json(AddConnectionResponse {
        message: "Connection request sent.".to_string(),
    }))
}

/// List every connection referencing the user, in either role
pub async fn get_connections(
    State(registry): State<ConnectionRegistry>,
    Path(user_id): Path<String>,
) -> Result<Json<ListConnectionsResponse>, BackendError> {
    let connections = registry.list_connections(&user_id).await.map_err(|e| {
        tracing::error!("Failed to fetch connections for {user_id}: {e}");
        BackendError::FetchConnections(e)
    })?;

    Ok(Json(ListConnectionsResponse { connections }))
}
