use serde::{Deserialize, Serialize};

/// The normalized form of a raw user record: name trimmed and title-cased,
/// email trimmed and lower-cased, age parsed to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedUser {
    pub name: String,
    pub email: String,
    pub age: i64,
}
