//! Shared Module
//!
//! This module contains the wire-format types exchanged between clients and
//! the backend. All types are designed for JSON serialization and use the
//! camelCase field names the frontend expects.

/// Chat relay types (role-tagged messages, request/response DTOs)
pub mod chat;

/// Messaging types (connections, thread messages)
pub mod messaging;

/// Re-export commonly used types for convenience
pub use chat::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
pub use messaging::{Connection, ConnectionStatus, NewThreadMessage, ThreadMessage};
