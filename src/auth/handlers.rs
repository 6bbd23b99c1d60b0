use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::AuthService,
    types::{LoginRequest, LoginResponse},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for logging in
///
/// POST /api/auth/login
/// Returns a signed bearer token for the authenticated username
#[instrument(name = "login", skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    info!(username = %request.username, "Login attempt");

    let service = AuthService::new(
        Arc::clone(&state.credential_verifier),
        Arc::clone(&state.token_service),
    );
    let response = service.login(request)?;

    Ok(Json(response))
}
