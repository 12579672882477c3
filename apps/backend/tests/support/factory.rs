//! Seed and teardown helpers that go through the repos layer.

use catalog_backend::repos::consoles::{self, Console};
use catalog_backend::repos::games::{self, Game};
use catalog_backend::AppError;
use sea_orm::ConnectionTrait;

pub async fn create_console<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Console, AppError> {
    Ok(consoles::create_console(conn, name).await?)
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    console_id: i64,
) -> Result<Game, AppError> {
    Ok(games::create_game(conn, title, console_id).await?)
}

/// Wipe both tables; games first because of the console foreign key.
pub async fn reset_db<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<(), AppError> {
    games::delete_all(conn).await?;
    consoles::delete_all(conn).await?;
    Ok(())
}
