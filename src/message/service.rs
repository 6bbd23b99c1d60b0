use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    models::{Message, NewMessage, MAX_CONTENT_LENGTH},
    repository::MessageRepository,
    types::MessageCreateRequest,
};
use crate::shared::AppError;

/// Service for handling contact message business logic
pub struct MessageService {
    repository: Arc<dyn MessageRepository + Send + Sync>,
}

impl MessageService {
    pub fn new(repository: Arc<dyn MessageRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Stamps the submission with the server time and stores it
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: MessageCreateRequest) -> Result<Message, AppError> {
        let content_length = request.content.chars().count();
        if content_length > MAX_CONTENT_LENGTH {
            warn!(content_length, "Message content exceeds maximum length");
            return Err(AppError::Validation(format!(
                "Message content must be at most {} characters",
                MAX_CONTENT_LENGTH
            )));
        }

        let message = NewMessage::new(request.name, request.email, request.content);
        let stored = self.repository.save_message(&message).await?;

        info!(message_id = stored.id, "Message stored");
        Ok(stored)
    }
}
