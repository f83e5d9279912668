use async_trait::async_trait;

use crate::domain::{DomainError, QueryRow};

/// A database connection lifecycle and query surface.
///
/// Implementations may be real or stubbed; callers only rely on
/// `execute_query` failing with [`DomainError::NotConnected`] outside a
/// `connect`/`close` window.
#[async_trait]
pub trait Database: Send + Sync {
    async fn connect(&self) -> Result<(), DomainError>;

    async fn execute_query(&self, query: &str) -> Result<Vec<QueryRow>, DomainError>;

    async fn close(&self) -> Result<(), DomainError>;

    async fn is_connected(&self) -> bool;
}
