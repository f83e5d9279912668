use std::sync::Arc;

use crate::application::UserRepository;
use crate::domain::{DomainError, User};

pub struct GetUserInfoUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUserInfoUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.user_repo.find_by_username(username).await
    }
}
