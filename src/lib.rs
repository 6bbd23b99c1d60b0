// Library crate for the portfolio backend
// This file exposes the public API for the binary and integration tests

pub mod app;
pub mod auth;
pub mod config;
pub mod message;
pub mod project;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use app::build_router;
pub use auth::{TokenError, TokenService};
pub use config::AppConfig;
pub use shared::{AppError, AppState};
