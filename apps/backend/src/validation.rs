//! Request body schemas and their validation rules.
//!
//! Schemas are deserialized by `ValidatedJson` and then checked with
//! [`Validate`] before any handler logic runs.

use serde::Deserialize;
use serde_json::Number;

use crate::errors::domain::DomainError;

/// Post-deserialization checks for a request body schema.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

/// Body of `POST /consoles`. Unrecognized keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleBody {
    pub name: String,
}

impl Validate for ConsoleBody {
    fn validate(&self) -> Result<(), DomainError> {
        require_non_blank("name", &self.name)
    }
}

/// Body of `POST /games`. Exactly `title` and `consoleId`.
///
/// `consoleId` is kept as the number sent so that integers beyond the id
/// range still validate and are reported as an unknown console.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameBody {
    pub title: String,
    #[serde(rename = "consoleId")]
    pub console_id: Number,
}

impl GameBody {
    /// `consoleId` as a row id, or `None` when it is outside the id range.
    pub fn console_row_id(&self) -> Option<i64> {
        self.console_id.as_i64()
    }
}

impl Validate for GameBody {
    fn validate(&self) -> Result<(), DomainError> {
        require_non_blank("title", &self.title)?;
        if !(self.console_id.is_i64() || self.console_id.is_u64()) {
            return Err(DomainError::validation("consoleId must be an integer"));
        }
        Ok(())
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
