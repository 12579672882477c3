//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here (also available through `?` via
//! the `From<DbErr>` impl), and higher layers map `DomainError` to `AppError`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" error messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',' || c == ')')
        .next()
        .filter(|s| !s.is_empty())
}

/// Map SQLite table.column format to domain-specific conflict errors.
fn map_sqlite_table_column_to_conflict(table_column: &str) -> Option<(ConflictKind, &'static str)> {
    match table_column {
        "console.name" => Some((ConflictKind::ConsoleName, "Console name already exists")),
        "game.title" => Some((ConflictKind::GameTitle, "Game title already exists")),
        _ => None,
    }
}

/// Map PostgreSQL constraint names to domain-specific conflict errors.
fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_console_name") {
        return Some((ConflictKind::ConsoleName, "Console name already exists"));
    }
    if error_msg.contains("ux_game_title") {
        return Some((ConflictKind::GameTitle, "Game title already exists"));
    }
    None
}

fn unique_conflict(error_msg: &str) -> DomainError {
    if let Some(table_column) = extract_sqlite_table_column(error_msg) {
        if let Some((kind, detail)) = map_sqlite_table_column_to_conflict(table_column) {
            return DomainError::conflict(kind, detail);
        }
    }
    if let Some((kind, detail)) = map_postgres_constraint_to_conflict(error_msg) {
        return DomainError::conflict(kind, detail);
    }
    DomainError::conflict(
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

// The only foreign key in the schema is game.console_id -> console.id.
fn foreign_key_conflict() -> DomainError {
    DomainError::conflict(ConflictKind::UnknownConsole, "Referenced console does not exist")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            warn!(trace_id = %trace_id, raw_error = %msg, "Unique constraint violation");
            return unique_conflict(&msg);
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            warn!(trace_id = %trace_id, raw_error = %msg, "Foreign key constraint violation");
            return foreign_key_conflict();
        }
        _ => {}
    }

    // Fallback for drivers/messages that sql_err() does not classify
    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return unique_conflict(&error_msg);
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return foreign_key_conflict();
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        map_db_err(e)
    }
}
