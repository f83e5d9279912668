use async_trait::async_trait;

use crate::domain::{DomainError, User};

/// User record storage keyed by username.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user. Fails with [`DomainError::AlreadyExists`] when the
    /// username is taken; the stored set is left unchanged in that case.
    async fn insert(&self, user: User) -> Result<(), DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// All users in registration order.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
