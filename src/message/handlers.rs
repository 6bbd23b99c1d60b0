use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Message, service::MessageService, types::MessageCreateRequest};
use crate::shared::{AppError, AppState};

/// HTTP handler for submitting a contact message
///
/// POST /api/messages
/// Returns the stored message with its generated id and creation time
#[instrument(name = "submit_message", skip(state, request))]
pub async fn submit_message(
    State(state): State<AppState>,
    Json(request): Json<MessageCreateRequest>,
) -> Result<Json<Message>, AppError> {
    info!(email = %request.email, "Receiving contact message");

    let service = MessageService::new(Arc::clone(&state.message_repository));
    let message = service.submit(request).await?;

    Ok(Json(message))
}
