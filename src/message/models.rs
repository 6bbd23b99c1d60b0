use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Upper bound on message content, in characters
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Database model for messages table
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A message ready to be persisted; the repository assigns the id
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    /// Stamps the submission with the current server time
    pub fn new(name: String, email: String, content: String) -> Self {
        Self {
            name,
            email,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn into_message(self, id: i64) -> Message {
        Message {
            id,
            name: self.name,
            email: self.email,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
