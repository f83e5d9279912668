use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::Database;
use crate::domain::{DomainError, QueryRow};

/// In-memory stand-in for a database connection: `connect` flips a flag and
/// every query returns the same hardcoded row. Useful as a fixture where the
/// workflow shape matters and the data does not.
pub struct StubDatabase {
    connection_string: String,
    connected: Mutex<bool>,
}

impl StubDatabase {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            connected: Mutex::new(false),
        }
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }
}

#[async_trait]
impl Database for StubDatabase {
    async fn connect(&self) -> Result<(), DomainError> {
        let mut connected = self.connected.lock().await;
        *connected = true;

        debug!("Connected to {}", self.connection_string);
        Ok(())
    }

    async fn execute_query(&self, query: &str) -> Result<Vec<QueryRow>, DomainError> {
        let connected = self.connected.lock().await;
        if !*connected {
            return Err(DomainError::NotConnected);
        }

        debug!("Executing query: {}", query);
        Ok(vec![QueryRow::new(1, "test")])
    }

    async fn close(&self) -> Result<(), DomainError> {
        let mut connected = self.connected.lock().await;
        *connected = false;

        debug!("Closed connection to {}", self.connection_string);
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        *self.connected.lock().await
    }
}
