use tracing::warn;

const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Process configuration, read once at startup and handed to the components
/// that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    /// In-memory storage is used when unset
    pub database_url: Option<String>,
    pub bind_addr: String,
}

impl AppConfig {
    /// Reads `JWT_SECRET`, `DATABASE_URL` and `BIND_ADDR` from the environment
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    pub fn from_source(get: impl Fn(&str) -> Option<String>) -> Self {
        let jwt_secret = get("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .unwrap_or_else(|| {
                warn!("JWT_SECRET not set, using the development secret");
                DEFAULT_JWT_SECRET.to_string()
            });

        Self {
            jwt_secret,
            database_url: get("DATABASE_URL").filter(|url| !url.is_empty()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}
