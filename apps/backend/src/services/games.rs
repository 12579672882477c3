//! Game catalog services.

use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::{info, warn};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::consoles;
use crate::repos::games::{self, Game};

/// Game domain service.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// All games, ascending by id.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Game>, AppError> {
        Ok(games::find_all(conn).await?)
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game_id: i64,
    ) -> Result<Game, AppError> {
        Ok(games::require_game(conn, game_id).await?)
    }

    /// Create a game.
    ///
    /// Rejects a taken title first, then a `console_id` with no console.
    /// `None` is an integer outside the id range, which no console can have.
    /// Both checks and the insert run in one transaction.
    pub async fn create<C: TransactionTrait>(
        &self,
        conn: &C,
        title: String,
        console_id: Option<i64>,
    ) -> Result<Game, AppError> {
        with_txn(conn, move |txn| {
            Box::pin(async move {
                if let Some(existing) = games::find_by_title(txn, &title).await? {
                    warn!(game_id = existing.id, title = %title, "game title already taken");
                    return Err(DomainError::conflict(
                        ConflictKind::GameTitle,
                        format!("Game title '{title}' is already taken"),
                    )
                    .into());
                }

                let Some(console_id) = console_id else {
                    warn!(title = %title, "game references out-of-range console id");
                    return Err(DomainError::conflict(
                        ConflictKind::UnknownConsole,
                        "consoleId does not match any console",
                    )
                    .into());
                };
                if !consoles::exists(txn, console_id).await? {
                    warn!(console_id, title = %title, "game references unknown console");
                    return Err(DomainError::conflict(
                        ConflictKind::UnknownConsole,
                        format!("Console {console_id} does not exist"),
                    )
                    .into());
                }

                let game = games::create_game(txn, &title, console_id).await?;
                info!(
                    game_id = game.id,
                    console_id = game.console_id,
                    title = %game.title,
                    "game created"
                );
                Ok(game)
            })
        })
        .await
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
