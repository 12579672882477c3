//! Console repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::consoles_sea as consoles_adapter;
use crate::entities::consoles;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Console domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Console {
    pub id: i64,
    pub name: String,
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Console>, DomainError> {
    let rows = consoles_adapter::find_all(conn).await?;
    Ok(rows.into_iter().map(Console::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    console_id: i64,
) -> Result<Option<Console>, DomainError> {
    let console = consoles_adapter::find_by_id(conn, console_id).await?;
    Ok(console.map(Console::from))
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<Console>, DomainError> {
    let console = consoles_adapter::find_by_name(conn, name).await?;
    Ok(console.map(Console::from))
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    console_id: i64,
) -> Result<bool, DomainError> {
    Ok(consoles_adapter::exists(conn, console_id).await?)
}

/// Load a console or fail with `NotFound(Console)`.
pub async fn require_console<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    console_id: i64,
) -> Result<Console, DomainError> {
    find_by_id(conn, console_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Console,
            format!("Console {console_id} not found"),
        )
    })
}

pub async fn create_console<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Console, DomainError> {
    let dto = consoles_adapter::ConsoleCreate::new(name);
    let console = consoles_adapter::create_console(conn, dto).await?;
    Ok(Console::from(console))
}

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(consoles_adapter::delete_all(conn).await?)
}

impl From<consoles::Model> for Console {
    fn from(model: consoles::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
