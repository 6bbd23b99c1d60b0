/// Decides whether a username/password pair is allowed to log in.
///
/// Login only depends on this trait, so a real credential store can replace
/// the hardcoded pair without touching token issuance.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Single fixed administrator account
pub struct HardcodedCredentialVerifier {
    username: String,
    password: String,
}

impl HardcodedCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for HardcodedCredentialVerifier {
    fn default() -> Self {
        Self::new("admin", "admin123")
    }
}

impl CredentialVerifier for HardcodedCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
