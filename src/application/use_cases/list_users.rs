use std::sync::Arc;

use crate::application::UserRepository;
use crate::domain::{DomainError, User};

pub struct ListUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Lists users in registration order.
    pub async fn execute(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.list().await
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        self.user_repo.count().await
    }
}
