// Public API - what other modules can use
pub use credentials::{CredentialVerifier, HardcodedCredentialVerifier};
pub use handlers::login;
pub use middleware::require_bearer;
pub use token::{TokenError, TokenService, TOKEN_LIFETIME_SECS};
pub use types::{AuthenticatedUser, LoginRequest, LoginResponse, TokenClaims};

// Internal modules
mod credentials;
mod handlers;
mod middleware;
pub mod service;
mod token;
mod types;
