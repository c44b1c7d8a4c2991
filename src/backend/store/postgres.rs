//! PostgreSQL store backends
//!
//! Both collections live in PostgreSQL. Connection upserts rely on
//! `ON CONFLICT` against the composite key; message timestamps come from the
//! database's own clock via the `created_at` column default.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::{ConnectionStore, MessageStore, StoreError};
use crate::shared::messaging::{Connection, ConnectionStatus, NewThreadMessage, ThreadMessage};

/// Connection collection backed by the `connections` table
#[derive(Clone)]
pub struct PgConnectionStore {
    pool: PgPool,
}

impl PgConnectionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn connection_from_row(row: &sqlx::postgres::PgRow) -> Connection {
    Connection {
        id: row.get("id"),
        client_id: row.get("client_id"),
        therapist_id: row.get("therapist_id"),
        status: ConnectionStatus::from_str(row.get::<String, _>("status").as_str())
            .unwrap_or_default(),
    }
}

#[async_trait]
impl ConnectionStore for PgConnectionStore {
    async fn upsert(&self, connection: &Connection) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO connections (id, client_id, therapist_id, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET client_id = EXCLUDED.client_id,
                therapist_id = EXCLUDED.therapist_id,
                status = EXCLUDED.status
            "#,
        )
        .bind(&connection.id)
        .bind(&connection.client_id)
        .bind(&connection.therapist_id)
        .bind(connection.status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_client(&self, user_id: &str) -> Result<Vec<Connection>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, client_id, therapist_id, status
            FROM connections
            WHERE client_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(connection_from_row).collect())
    }

    async fn find_by_therapist(&self, user_id: &str) -> Result<Vec<Connection>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, client_id, therapist_id, status
            FROM connections
            WHERE therapist_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(connection_from_row).collect())
    }
}

/// Message collections backed by the `thread_messages` table
#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn append(
        &self,
        thread_id: &str,
        message: &NewThreadMessage,
    ) -> Result<(), StoreError> {
        // created_at is left to the column default so the timestamp is the
        // database's clock, not the caller's.
        sqlx::query(
            r#"
            INSERT INTO thread_messages (thread_id, sender_id, receiver_id, message)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(thread_id)
        .bind(&message.sender_id)
        .bind(&message.receiver_id)
        .bind(&message.message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_thread(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT sender_id, receiver_id, message, created_at
            FROM thread_messages
            WHERE thread_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ThreadMessage {
                sender_id: row.get("sender_id"),
                receiver_id: row.get("receiver_id"),
                message: row.get("message"),
                timestamp: row.get("created_at"),
            })
            .collect())
    }
}
