//! In-memory user storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::UserRepository;
use crate::domain::{DomainError, User};

/// In-memory user storage for testing and demonstration.
///
/// Keeps a username index plus the registration order, so `list` returns
/// users in the order they were inserted.
pub struct InMemoryUserStorage {
    inner: Mutex<Registry>,
}

#[derive(Default)]
struct Registry {
    users: HashMap<String, User>,
    order: Vec<String>,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Registry::default()),
        }
    }
}

impl Default for InMemoryUserStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStorage {
    async fn insert(&self, user: User) -> Result<(), DomainError> {
        let mut registry = self.inner.lock().await;
        if registry.users.contains_key(user.username()) {
            return Err(DomainError::already_exists(user.username()));
        }

        let username = user.username().to_string();
        registry.order.push(username.clone());
        registry.users.insert(username, user);

        debug!("Stored user, {} total", registry.users.len());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let registry = self.inner.lock().await;
        Ok(registry.users.get(username).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let registry = self.inner.lock().await;
        Ok(registry
            .order
            .iter()
            .filter_map(|username| registry.users.get(username).cloned())
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let registry = self.inner.lock().await;
        Ok(registry.users.len() as u64)
    }
}
