use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// An age value as it arrives in raw input: either already numeric or a
/// string still to be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeValue {
    Number(i64),
    Text(String),
}

impl AgeValue {
    /// Falsy mirrors the loose-input convention the helpers accept:
    /// the integer 0 and the empty string. The string "0" is truthy.
    pub fn is_falsy(&self) -> bool {
        match self {
            AgeValue::Number(n) => *n == 0,
            AgeValue::Text(s) => s.is_empty(),
        }
    }

    pub fn parse(&self) -> Result<i64, DomainError> {
        match self {
            AgeValue::Number(n) => Ok(*n),
            AgeValue::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| DomainError::parse(format!("invalid age: '{}'", s))),
        }
    }
}

impl From<i64> for AgeValue {
    fn from(n: i64) -> Self {
        AgeValue::Number(n)
    }
}

impl From<&str> for AgeValue {
    fn from(s: &str) -> Self {
        AgeValue::Text(s.to_string())
    }
}

/// Loosely-typed user input before validation and normalization.
/// Any field may be missing, mirroring dictionary-shaped payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeValue>,
}

impl RawUserData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_age(mut self, age: impl Into<AgeValue>) -> Self {
        self.age = Some(age.into());
        self
    }
}
