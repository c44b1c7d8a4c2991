//! Connections Module
//!
//! Creation and lookup of client/therapist connection records.
//!
//! - **`registry`** - The store-backed `ConnectionRegistry` facade
//! - **`handlers`** - HTTP handlers for `/add-connection` and
//!   `/get-connections/{userId}`

pub mod handlers;
pub mod registry;

pub use registry::ConnectionRegistry;
