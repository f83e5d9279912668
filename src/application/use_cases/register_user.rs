use std::sync::Arc;

use tracing::info;

use crate::application::UserRepository;
use crate::domain::{DomainError, User};

pub struct RegisterUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl RegisterUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Registers a new user. No email-format validation is performed; the
    /// only constraint is username uniqueness.
    pub async fn execute(&self, username: &str, email: &str) -> Result<User, DomainError> {
        let user = User::new(username, email);
        self.user_repo.insert(user.clone()).await?;

        info!("Registered user {}", username);
        Ok(user)
    }
}
