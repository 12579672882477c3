//! Game repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::games_sea as games_adapter;
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Game domain model
///
/// Converted from the database model (games::Model) when loaded through
/// repos functions. `console_id` always refers to an existing console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub console_id: i64,
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Game>, DomainError> {
    let rows = games_adapter::find_all(conn).await?;
    Ok(rows.into_iter().map(Game::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_id(conn, game_id).await?;
    Ok(game.map(Game::from))
}

pub async fn find_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Option<Game>, DomainError> {
    let game = games_adapter::find_by_title(conn, title).await?;
    Ok(game.map(Game::from))
}

pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Game, DomainError> {
    find_by_id(conn, game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    console_id: i64,
) -> Result<Game, DomainError> {
    let dto = games_adapter::GameCreate::new(title, console_id);
    let game = games_adapter::create_game(conn, dto).await?;
    Ok(Game::from(game))
}

pub async fn delete_all<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(games_adapter::delete_all(conn).await?)
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            console_id: model.console_id,
        }
    }
}
