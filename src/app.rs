use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::{self, HardcodedCredentialVerifier, TokenService};
use crate::config::AppConfig;
use crate::message::{
    self,
    repository::{InMemoryMessageRepository, PostgresMessageRepository},
};
use crate::project::{
    self,
    repository::{InMemoryProjectRepository, PostgresProjectRepository},
};
use crate::shared::AppState;

/// Builds state backed by in-memory stores
pub fn in_memory_state(config: &AppConfig) -> AppState {
    AppState::new(
        Arc::new(TokenService::new(&config.jwt_secret)),
        Arc::new(HardcodedCredentialVerifier::default()),
        Arc::new(InMemoryMessageRepository::new()),
        Arc::new(InMemoryProjectRepository::new()),
    )
}

/// Builds state backed by PostgreSQL stores sharing one pool
pub fn postgres_state(config: &AppConfig, pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(TokenService::new(&config.jwt_secret)),
        Arc::new(HardcodedCredentialVerifier::default()),
        Arc::new(PostgresMessageRepository::new(pool.clone())),
        Arc::new(PostgresProjectRepository::new(pool)),
    )
}

/// Assembles all route groups. Project writes sit behind the bearer gate.
pub fn build_router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/projects", post(project::create_project))
        .route("/api/projects/:id", delete(project::delete_project))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/messages", post(message::submit_message))
        .route("/api/projects", get(project::list_projects))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
