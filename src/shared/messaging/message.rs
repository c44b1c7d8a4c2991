//! Thread Message Data Structure
//!
//! Represents messages in the append-only log between two participants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored message within a thread
///
/// The timestamp is assigned by the store's server-side clock when the
/// message is appended, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThreadMessage {
    /// User who sent the message
    pub sender_id: String,
    /// User the message is addressed to
    pub receiver_id: String,
    /// Text payload
    pub message: String,
    /// Server-assigned write time
    pub timestamp: DateTime<Utc>,
}

/// A message to be appended, before the store assigns its timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewThreadMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
}

/// Request body for `POST /send-message`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
}

/// Response body for `POST /send-message`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message: String,
}
