use axum::Router;
use std::sync::Arc;

use portfolio::{
    auth::{HardcodedCredentialVerifier, TokenService},
    build_router,
    message::repository::InMemoryMessageRepository,
    project::repository::InMemoryProjectRepository,
    AppState,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestApp {
    pub router: Router,
    pub token_service: Arc<TokenService>,
    pub messages: Arc<InMemoryMessageRepository>,
    pub projects: Arc<InMemoryProjectRepository>,
}

impl TestApp {
    /// Full router wired to fresh in-memory stores
    pub fn new() -> Self {
        let token_service = Arc::new(TokenService::new(TEST_SECRET));
        let messages = Arc::new(InMemoryMessageRepository::new());
        let projects = Arc::new(InMemoryProjectRepository::new());

        let state = AppState::new(
            token_service.clone(),
            Arc::new(HardcodedCredentialVerifier::default()),
            messages.clone(),
            projects.clone(),
        );

        Self {
            router: build_router(state),
            token_service,
            messages,
            projects,
        }
    }
}
