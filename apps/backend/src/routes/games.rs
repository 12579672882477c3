//! Game HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{GameId, ValidatedJson};
use crate::repos::games::Game;
use crate::services::games::GameService;
use crate::state::app_state::AppState;
use crate::validation::GameBody;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: i64,
    pub title: String,
    pub console_id: i64,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            title: game.title,
            console_id: game.console_id,
        }
    }
}

/// GET /games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let games = GameService::new().list(db).await?;

    let body: Vec<GameResponse> = games.into_iter().map(GameResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /games/{id}
async fn get_game(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let game = GameService::new().get(db, game_id.0).await?;

    Ok(HttpResponse::Ok().json(GameResponse::from(game)))
}

/// POST /games
///
/// 201 with the stored game; 422 for an invalid body; 409 when the title is
/// taken or `consoleId` names no console.
async fn create_game(
    body: ValidatedJson<GameBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body: GameBody = body.into_inner();
    let console_id = body.console_row_id();
    let game = GameService::new().create(db, body.title, console_id).await?;

    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    )
    .service(web::resource("/{id}").route(web::get().to(get_game)));
}
