//! Connection Registry
//!
//! A stateless facade over the connection store. Creates pending connection
//! records and looks up the connections a user participates in, in either
//! role.

use std::sync::Arc;

use crate::backend::store::{ConnectionStore, StoreError};
use crate::shared::messaging::Connection;

/// Creates and looks up client/therapist connection records
#[derive(Clone)]
pub struct ConnectionRegistry {
    store: Arc<dyn ConnectionStore>,
}

impl ConnectionRegistry {
    pub fn new(store: Arc<dyn ConnectionStore>) -> Self {
        Self { store }
    }

    /// Create (or re-create) a pending connection for the given pair
    ///
    /// Writes the record at its composite `clientId_therapistId` key, so
    /// repeated requests for the same pair overwrite rather than duplicate.
    /// Status transitions beyond `pending` happen outside this backend.
    pub async fn create_connection(
        &self,
        client_id: &str,
        therapist_id: &str,
    ) -> Result<(), StoreError> {
        let connection = Connection::pending(client_id, therapist_id);
        self.store.upsert(&connection).await
    }

    /// All connections referencing `user_id` in either role
    ///
    /// Issues the two role queries concurrently and concatenates the results,
    /// client-role batch first. The merge performs no deduplication - a
    /// degenerate record whose client and therapist ids are equal appears
    /// twice - and no sorting; callers must not assume any ordering. If
    /// either sub-query fails the whole lookup fails.
    pub async fn list_connections(&self, user_id: &str) -> Result<Vec<Connection>, StoreError> {
        let (as_client, as_therapist) = tokio::try_join!(
            self.store.find_by_client(user_id),
            self.store.find_by_therapist(user_id),
        )?;

        let mut connections = as_client;
        connections.extend(as_therapist);
        Ok(connections)
    }
}
