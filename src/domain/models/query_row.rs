use serde::{Deserialize, Serialize};

/// A single row returned by a database query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRow {
    pub id: i64,
    pub name: String,
}

impl QueryRow {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
