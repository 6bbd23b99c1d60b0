use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    credentials::CredentialVerifier,
    token::TokenService,
    types::{LoginRequest, LoginResponse},
};
use crate::shared::AppError;

/// Service for handling login business logic
pub struct AuthService {
    credential_verifier: Arc<dyn CredentialVerifier + Send + Sync>,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        credential_verifier: Arc<dyn CredentialVerifier + Send + Sync>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            credential_verifier,
            token_service,
        }
    }

    /// Checks the credentials and issues a token for the username on success
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        if !self
            .credential_verifier
            .verify(&request.username, &request.password)
        {
            warn!("Login rejected: invalid credentials");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.token_service.issue(&request.username)?;
        info!("Login succeeded, token issued");

        Ok(LoginResponse { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credentials::HardcodedCredentialVerifier;

    fn service() -> (AuthService, Arc<TokenService>) {
        let token_service = Arc::new(TokenService::new("auth-service-test-secret"));
        let service = AuthService::new(
            Arc::new(HardcodedCredentialVerifier::default()),
            token_service.clone(),
        );
        (service, token_service)
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_success_issues_token_for_username() {
        let (service, token_service) = service();

        let response = service.login(request("admin", "admin123")).unwrap();

        assert_eq!(token_service.verify_subject(&response.token).unwrap(), "admin");
    }

    #[test]
    fn test_login_wrong_password() {
        let (service, _) = service();

        let result = service.login(request("admin", "wrong"));
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_login_uses_injected_verifier() {
        struct AllowAll;
        impl CredentialVerifier for AllowAll {
            fn verify(&self, _username: &str, _password: &str) -> bool {
                true
            }
        }

        let token_service = Arc::new(TokenService::new("auth-service-test-secret"));
        let service = AuthService::new(Arc::new(AllowAll), token_service.clone());

        let response = service.login(request("guest", "anything")).unwrap();
        assert_eq!(token_service.verify_subject(&response.token).unwrap(), "guest");
    }
}
