use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;
use tracing::{debug, instrument};

use super::types::TokenClaims;
use crate::shared::AppError;

/// Fixed lifetime of every issued token
pub const TOKEN_LIFETIME_SECS: i64 = 3600;

/// Reasons a bearer token can fail verification
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Malformed token: {0}")]
    Malformed(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Malformed(err.to_string()),
        }
    }
}

/// Issues and verifies HS256 bearer tokens.
///
/// Keys are derived once from the configured secret and never change, so a
/// single instance is shared across all requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the caller's clock in verify_subject_at
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime: Duration::seconds(TOKEN_LIFETIME_SECS),
        }
    }

    /// Creates a signed token for the given subject, valid for one hour
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        self.issue_at(subject, Utc::now())
    }

    #[instrument(skip(self))]
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        debug!(exp_timestamp = claims.exp, "Creating JWT token with expiration");

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            debug!(error = %e, "Failed to encode JWT token");
            AppError::Internal
        })
    }

    /// Verifies a token and returns its subject
    pub fn verify_subject(&self, token: &str) -> Result<String, TokenError> {
        self.verify_subject_at(token, Utc::now())
    }

    #[instrument(skip(self, token))]
    pub fn verify_subject_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "Failed to decode JWT token");
                TokenError::from(e)
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            debug!(exp = claims.exp, "JWT token has expired");
            return Err(TokenError::Expired);
        }

        debug!(subject = %claims.sub, exp = claims.exp, "JWT token verified");
        Ok(claims.sub)
    }
}
