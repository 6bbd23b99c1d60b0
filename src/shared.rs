use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::auth::{CredentialVerifier, TokenError, TokenService};
use crate::message::repository::MessageRepository;
use crate::project::repository::ProjectRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub credential_verifier: Arc<dyn CredentialVerifier + Send + Sync>,
    pub message_repository: Arc<dyn MessageRepository + Send + Sync>,
    pub project_repository: Arc<dyn ProjectRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        token_service: Arc<TokenService>,
        credential_verifier: Arc<dyn CredentialVerifier + Send + Sync>,
        message_repository: Arc<dyn MessageRepository + Send + Sync>,
        project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    ) -> Self {
        Self {
            token_service,
            credential_verifier,
            message_repository,
            project_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Token(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
