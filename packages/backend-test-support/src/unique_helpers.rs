//! Test helpers for generating unique test data
//!
//! ULID suffixes keep names and titles unique across tests that share a
//! database (file or Postgres backends).

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("console");
/// let b = unique_str("console");
/// assert_ne!(a, b);
/// assert!(a.starts_with("console-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

pub fn unique_console_name() -> String {
    unique_str("console")
}

pub fn unique_game_title() -> String {
    unique_str("game")
}
