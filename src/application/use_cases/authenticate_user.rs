use std::sync::Arc;

use tracing::debug;

use crate::application::UserRepository;
use crate::domain::DomainError;

/// Minimum password length accepted by the demo authentication check.
pub const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthenticateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl AuthenticateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Checks whether the user exists and the password meets the length
    /// requirement. Placeholder logic: no stored credential is compared.
    pub async fn execute(&self, username: &str, password: &str) -> Result<bool, DomainError> {
        if self.user_repo.find_by_username(username).await?.is_none() {
            debug!("Authentication failed: unknown user {}", username);
            return Ok(false);
        }

        Ok(password.len() >= MIN_PASSWORD_LEN)
    }
}
