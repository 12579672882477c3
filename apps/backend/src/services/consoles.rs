//! Console catalog services.

use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::{info, warn};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::consoles::{self, Console};

/// Console domain service.
pub struct ConsoleService;

impl ConsoleService {
    pub fn new() -> Self {
        Self
    }

    /// All consoles, ascending by id.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Console>, AppError> {
        Ok(consoles::find_all(conn).await?)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        console_id: i64,
    ) -> Result<Console, AppError> {
        Ok(consoles::require_console(conn, console_id).await?)
    }

    /// Create a console after checking the name is free.
    ///
    /// Check and insert share one transaction; a unique violation raised at
    /// insert time maps to the same `CONSOLE_NAME_TAKEN` conflict.
    pub async fn create<C: TransactionTrait>(
        &self,
        conn: &C,
        name: String,
    ) -> Result<Console, AppError> {
        with_txn(conn, move |txn| {
            Box::pin(async move {
                if let Some(existing) = consoles::find_by_name(txn, &name).await? {
                    warn!(
                        console_id = existing.id,
                        name = %name,
                        "console name already taken"
                    );
                    return Err(DomainError::conflict(
                        ConflictKind::ConsoleName,
                        format!("Console name '{name}' is already taken"),
                    )
                    .into());
                }

                let console = consoles::create_console(txn, &name).await?;
                info!(console_id = console.id, name = %console.name, "console created");
                Ok(console)
            })
        })
        .await
    }
}

impl Default for ConsoleService {
    fn default() -> Self {
        Self::new()
    }
}
