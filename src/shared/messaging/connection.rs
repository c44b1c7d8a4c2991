//! Connection Data Structure
//!
//! Represents a requested relationship between a client and a therapist,
//! keyed by the ordered pair of their identifiers.

use serde::{Deserialize, Serialize};

/// Status of a connection request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Request is pending
    Pending,
    /// Request was accepted
    Accepted,
    /// Request was rejected
    Rejected,
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        ConnectionStatus::Pending
    }
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Pending => "pending",
            ConnectionStatus::Accepted => "accepted",
            ConnectionStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(ConnectionStatus::Pending),
            "accepted" => Some(ConnectionStatus::Accepted),
            "rejected" => Some(ConnectionStatus::Rejected),
            _ => None,
        }
    }
}

/// Compute the composite key for a connection record.
///
/// The order is fixed: client first, therapist second. Unlike thread
/// addressing this is deliberately NOT symmetric -
/// `connection_key("a", "b")` and `connection_key("b", "a")` are two
/// different keys.
pub fn connection_key(client_id: &str, therapist_id: &str) -> String {
    format!("{client_id}_{therapist_id}")
}

/// Represents a client/therapist connection
///
/// At most one record exists per ordered (client, therapist) pair; the
/// composite `id` makes re-requesting the same pair an overwrite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// Composite key: `clientId_therapistId`
    pub id: String,
    /// The requesting client
    pub client_id: String,
    /// The requested therapist
    pub therapist_id: String,
    /// Current status; this backend only ever writes `pending`
    #[serde(default)]
    pub status: ConnectionStatus,
}

impl Connection {
    /// Create a new pending connection for the given pair
    pub fn pending(client_id: impl Into<String>, therapist_id: impl Into<String>) -> Self {
        let client_id = client_id.into();
        let therapist_id = therapist_id.into();
        Self {
            id: connection_key(&client_id, &therapist_id),
            client_id,
            therapist_id,
            status: ConnectionStatus::Pending,
        }
    }
}

/// Request body for `POST /add-connection`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddConnectionRequest {
    pub client_id: String,
    pub therapist_id: String,
}

/// Response body for `POST /add-connection`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddConnectionResponse {
    pub message: String,
}

/// Response body for `GET /get-connections/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConnectionsResponse {
    pub connections: Vec<Connection>,
}
