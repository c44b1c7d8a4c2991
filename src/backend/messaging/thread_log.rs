//! Threaded Message Log
//!
//! Messages between two participants live in a single thread regardless of
//! who sends first. The thread address is the lexicographically sorted pair
//! of participant ids joined with an underscore, which makes
//! `send_message(a, b, ..)` and `send_message(b, a, ..)` land in the same
//! thread.

use std::sync::Arc;

use crate::backend::store::{MessageStore, StoreError};
use crate::shared::messaging::{NewThreadMessage, ThreadMessage};

/// Canonical thread address for a pair of participants
///
/// Symmetric by construction: the participant ids are sorted before joining,
/// so the address is independent of send direction. Contrast with
/// `connection_key`, where order carries meaning.
pub fn thread_id(a: &str, b: &str) -> String {
    let mut participants = [a, b];
    participants.sort_unstable();
    participants.join("_")
}

/// Appends and reads messages within two-participant threads
#[derive(Clone)]
pub struct ThreadedMessageLog {
    store: Arc<dyn MessageStore>,
}

impl ThreadedMessageLog {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Append a message to the pair's thread
    ///
    /// The thread is created implicitly by the first message written to its
    /// address. The timestamp is assigned by the store; delivery is
    /// at-most-once - a failed write is not retried or buffered.
    pub async fn send_message(
        &self,
        sender_id: &str,
        receiver_id: &str,
        message: &str,
    ) -> Result<(), StoreError> {
        let thread = thread_id(sender_id, receiver_id);
        self.store
            .append(
                &thread,
                &NewThreadMessage {
                    sender_id: sender_id.to_string(),
                    receiver_id: receiver_id.to_string(),
                    message: message.to_string(),
                },
            )
            .await
    }

    /// All messages between the two participants, ordered by timestamp
    pub async fn thread_messages(
        &self,
        a: &str,
        b: &str,
    ) -> Result<Vec<ThreadMessage>, StoreError> {
        self.store.list_thread(&thread_id(a, b)).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::store::InMemoryStore;

    struct FailingMessageStore;

    #[async_trait]
    impl MessageStore for FailingMessageStore {
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

    #[test]
    fn test_thread_id_is_symmetric() {
        assert_eq!(thread_id("alice", "bob"), "alice_bob");
        assert_eq!(thread_id("bob", "alice"), "alice_bob");
        assert_eq!(thread_id("zoe", "amy"), thread_id("amy", "zoe"));
    }

    #[tokio::test]
    async fn test_both_directions_share_one_thread() {
        let store = Arc::new(InMemoryStore::new());
        let log = ThreadedMessageLog::new(store.clone());

        log.send_message("alice", "bob", "hello").await.unwrap();
        log.send_message("bob", "alice", "hi back").await.unwrap();

        // Both writes landed in "alice_bob"; no "bob_alice" thread exists.
        let messages = store.list_thread("alice_bob").await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender_id, "alice");
        assert_eq!(messages[0].message, "hello");
        assert_eq!(messages[1].sender_id, "bob");
        assert_eq!(messages[1].message, "hi back");
        assert!(messages[0].timestamp <= messages[1].timestamp);
    }

    #[tokio::test]
    async fn test_thread_messages_reads_either_direction() {
        let store = Arc::new(InMemoryStore::new());
        let log = ThreadedMessageLog::new(store);

        log.send_message("alice", "bob", "hello").await.unwrap();

        let forward = log.thread_messages("alice", "bob").await.unwrap();
        let reverse = log.thread_messages("bob", "alice").await.unwrap();
        assert_eq!(forward, reverse);
        assert_eq!(forward.len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let log = ThreadedMessageLog::new(Arc::new(FailingMessageStore));
        assert!(log.send_message("a", "b", "hi").await.is_err());
        assert!(log.thread_messages("a", "b").await.is_err());
    }
}
