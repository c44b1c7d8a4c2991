//! Store Ports
//!
//! The document store is an external collaborator. Rather than a process-wide
//! handle, it is injected into each component as a capability, which lets the
//! PostgreSQL backend be swapped for the in-memory one in tests or when no
//! database is configured.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Port traits and the store error type
//! ├── postgres.rs - PostgreSQL backend (sqlx)
//! └── memory.rs   - In-memory backend (tests, database-less fallback)
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::messaging::{Connection, NewThreadMessage, ThreadMessage};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::{PgConnectionStore, PgMessageStore};

/// Generic upstream-store failure
///
/// All store failures are surfaced as this single opaque variant; the
/// operation boundary converts it into the fixed per-endpoint error. No
/// retry is performed here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Port for the connection collection
#[async_trait]
pub trait ConnectionStore: Send + Sync {
    /// Write or overwrite the record at its composite key
    async fn upsert(&self, connection: &Connection) -> Result<(), StoreError>;

    /// Equality query: records whose `clientId` matches `user_id`
    async fn find_by_client(&self, user_id: &str) -> Result<Vec<Connection>, StoreError>;

    /// Equality query: records whose `therapistId` matches `user_id`
    async fn find_by_therapist(&self, user_id: &str) -> Result<Vec<Connection>, StoreError>;
}

/// Port for the per-thread message collections
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append a message to the thread, stamping it with the store's clock
    async fn append(&self, thread_id: &str, message: &NewThreadMessage)
        -> Result<(), StoreError>;

    /// All messages in the thread, ordered by timestamp
    async fn list_thread(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, StoreError>;
}
