use actix_web::{web, HttpResponse};
use migration::{get_latest_migration_version, is_schema_current};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::state::app_state::AppState;

/// Overall verdict: `degraded` whenever the catalog store cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Verdict {
    Ok,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum DbState {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: Verdict,
    app_version: &'static str,
    db: DbState,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    schema_current: bool,
    time: String,
}

/// Result of probing the catalog database.
struct DbCheck {
    state: DbState,
    error: Option<String>,
    migrations: String,
    schema_current: bool,
}

impl DbCheck {
    fn failed(error: String) -> Self {
        Self {
            state: DbState::Error,
            error: Some(error),
            migrations: "unknown".to_string(),
            schema_current: false,
        }
    }

    async fn run(db: &DatabaseConnection) -> Self {
        let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
        if let Err(e) = db.query_one(ping).await {
            return Self::failed(format!("DB query failed: {e}"));
        }

        let migrations = match get_latest_migration_version(db).await {
            Ok(Some(version)) => version,
            Ok(None) => "no_migrations".to_string(),
            Err(_) => "unknown".to_string(),
        };
        let schema_current = is_schema_current(db).await.unwrap_or(false);

        Self {
            state: DbState::Ok,
            error: None,
            migrations,
            schema_current,
        }
    }
}

/// GET /health
///
/// Always 200; database trouble or a schema behind the latest migration is
/// reported as `degraded` in the body.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let check = match require_db(&app_state) {
        Ok(db) => DbCheck::run(db).await,
        Err(e) => DbCheck::failed(format!("DB unavailable: {e}")),
    };

    let status = if check.state == DbState::Ok && check.schema_current {
        Verdict::Ok
    } else {
        Verdict::Degraded
    };

    HttpResponse::Ok().json(HealthResponse {
        status,
        app_version: env!("CARGO_PKG_VERSION"),
        db: check.state,
        db_error: check.error,
        migrations: check.migrations,
        schema_current: check.schema_current,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
