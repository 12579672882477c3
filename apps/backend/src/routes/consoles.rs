//! Console HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{ConsoleId, ValidatedJson};
use crate::repos::consoles::Console;
use crate::services::consoles::ConsoleService;
use crate::state::app_state::AppState;
use crate::validation::ConsoleBody;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleResponse {
    pub id: i64,
    pub name: String,
}

impl From<Console> for ConsoleResponse {
    fn from(console: Console) -> Self {
        Self {
            id: console.id,
            name: console.name,
        }
    }
}

/// GET /consoles
async fn list_consoles(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let consoles = ConsoleService::new().list(db).await?;

    let body: Vec<ConsoleResponse> = consoles.into_iter().map(ConsoleResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /consoles/{id}
async fn get_console(
    console_id: ConsoleId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let console = ConsoleService::new().get(db, console_id.0).await?;

    Ok(HttpResponse::Ok().json(ConsoleResponse::from(console)))
}

/// POST /consoles
///
/// 201 with the stored console; 422 for an invalid body; 409 when the name
/// is already taken.
async fn create_console(
    body: ValidatedJson<ConsoleBody>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let ConsoleBody { name } = body.into_inner();
    let console = ConsoleService::new().create(db, name).await?;

    Ok(HttpResponse::Created().json(ConsoleResponse::from(console)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_consoles))
            .route(web::post().to(create_console)),
    )
    .service(web::resource("/{id}").route(web::get().to(get_console)));
}
