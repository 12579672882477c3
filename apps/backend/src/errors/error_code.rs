//! Error codes for the catalog API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Request body failed schema validation
    ValidationError,
    /// Request body exceeded the size limit
    PayloadTooLarge,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Console not found
    ConsoleNotFound,
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Another console already uses this name
    ConsoleNameTaken,
    /// Another game already uses this title
    GameTitleTaken,
    /// The referenced console does not exist
    UnknownConsole,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::BadRequest => "BAD_REQUEST",

            Self::ConsoleNotFound => "CONSOLE_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ConsoleNameTaken => "CONSOLE_NAME_TAKEN",
            Self::GameTitleTaken => "GAME_TITLE_TAKEN",
            Self::UnknownConsole => "UNKNOWN_CONSOLE",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, for uniqueness checks.
    pub const ALL: [ErrorCode; 14] = [
        Self::ValidationError,
        Self::PayloadTooLarge,
        Self::BadRequest,
        Self::ConsoleNotFound,
        Self::GameNotFound,
        Self::NotFound,
        Self::ConsoleNameTaken,
        Self::GameTitleTaken,
        Self::UnknownConsole,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
