//! Messaging Module
//!
//! Data structures for the connection and messaging system:
//!
//! - `Connection` - A requested client/therapist relationship
//! - `ThreadMessage` - A message in a two-participant thread
//!
//! Plus the request/response DTOs for the corresponding HTTP endpoints.

pub mod connection;
pub mod message;

// Re-export all types
pub use connection::{
    connection_key, AddConnectionRequest, AddConnectionResponse, Connection, ConnectionStatus,
    ListConnectionsResponse,
};
pub use message::{NewThreadMessage, SendMessageRequest, SendMessageResponse, ThreadMessage};
