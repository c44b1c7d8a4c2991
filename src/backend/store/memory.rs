//! In-memory store backend
//!
//! Used by the test suite and as the fallback backend when `DATABASE_URL` is
//! not configured. Messages are stamped with the process clock at append
//! time, so append order and timestamp order coincide.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ConnectionStore, MessageStore, StoreError};
use crate::shared::messaging::{Connection, NewThreadMessage, ThreadMessage};

/// In-memory document store implementing both collection ports
pub struct InMemoryStore {
    /// Connection records keyed by composite id
    connections: RwLock<HashMap<String, Connection>>,
    /// Message logs keyed by thread id, in append order
    threads: RwLock<HashMap<String, Vec<ThreadMessage>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            threads: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionStore for InMemoryStore {
    async fn upsert(&self, connection: &Connection) -> Result<(), StoreError> {
        let mut connections = self.connections.write().await;
        connections.insert(connection.id.clone(), connection.clone());
        Ok(())
    }

    async fn find_by_client(&self, user_id: &str) -> Result<Vec<Connection>, StoreError> {
        let connections = self.connections.read().await;
        Ok(connections
            .values()
            .filter(|c| c.client_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_therapist(&self, user_id: &str) -> Result<Vec<Connection>, StoreError> {
        let connections = self.connections.read().await;
        Ok(connections
            .values()
            .filter(|c| c.therapist_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn append(
        &self,
        thread_id: &str,
        message: &NewThreadMessage,
    ) -> Result<(), StoreError> {
        let mut threads = self.threads.write().await;
        threads
            .entry(thread_id.to_string())
            .or_default()
            .push(ThreadMessage {
                sender_id: message.sender_id.clone(),
                receiver_id: message.receiver_id.clone(),
                message: message.message.clone(),
                timestamp: Utc::now(),
            });
        Ok(())
    }

    async fn list_thread(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, StoreError> {
        let threads = self.threads.read().await;
        Ok(threads.get(thread_id).cloned().unwrap_or_default())
    }
}
