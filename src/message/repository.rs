use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::{Message, NewMessage};
use crate::shared::AppError;

/// Trait for message repository operations
#[async_trait]
pub trait MessageRepository {
    /// Persists the message and returns it with its generated id
    async fn save_message(&self, message: &NewMessage) -> Result<Message, AppError>;
}

struct MessageTable {
    messages: Vec<Message>,
    next_id: i64,
}

/// In-memory implementation of MessageRepository for development and testing
///
/// Ids start at 1 and increase by one per saved message. Data is lost when
/// the application restarts.
pub struct InMemoryMessageRepository {
    table: Mutex<MessageTable>,
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMessageRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            table: Mutex::new(MessageTable {
                messages: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns a snapshot of every stored message, oldest first
    pub fn messages(&self) -> Vec<Message> {
        self.table
            .lock()
            .map(|table| table.messages.clone())
            .unwrap_or_default()
    }

    /// Returns the current number of messages in the repository
    pub fn message_count(&self) -> usize {
        self.table
            .lock()
            .map(|table| table.messages.len())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    #[instrument(skip(self, message))]
    async fn save_message(&self, message: &NewMessage) -> Result<Message, AppError> {
        debug!(email = %message.email, "Saving message in memory");

        let mut table = self.table.lock().map_err(|_| {
            warn!("Message table lock poisoned");
            AppError::Internal
        })?;

        let id = table.next_id;
        table.next_id += 1;

        let stored = message.clone().into_message(id);
        table.messages.push(stored.clone());

        debug!(message_id = id, "Message saved successfully in memory");
        Ok(stored)
    }
}

/// PostgreSQL implementation of message repository
pub struct PostgresMessageRepository {
    pool: PgPool,
}

impl PostgresMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PostgresMessageRepository {
    #[instrument(skip(self, message))]
    async fn save_message(&self, message: &NewMessage) -> Result<Message, AppError> {
        debug!(email = %message.email, "Saving message in database");

        let row = sqlx::query(
            "INSERT INTO messages (name, email, content, created_at) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.content)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to save message in database");
            AppError::DatabaseError(e.to_string())
        })?;

        let id: i64 = row.get("id");
        debug!(message_id = id, "Message saved successfully in database");

        Ok(message.clone().into_message(id))
    }
}
