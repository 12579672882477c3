use std::future::Future;
use std::time::{Duration, Instant};

use migration::{is_schema_current, migrate, MigrationCommand};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::{info, warn};

use crate::config::db::{make_conn_spec, DbKind, DbOwner, PoolSettings, RuntimeEnv};
use crate::error::DbInfraError;

fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        DbInfraError::config("no error recorded after max attempts (this should not happen)")
    }))
}

/// Sanitize database URL by masking password in connection strings.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.split_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        // "postgresql:" alone has no password segment
        Some(colon_pos) if auth_part[..colon_pos].contains("//") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

/// Open a pooled connection for the given environment, engine and owner.
///
/// Postgres connections are retried a few times to ride out container
/// start-up ordering; SQLite connects once.
pub async fn connect(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, owner)?;
    let settings = PoolSettings::for_kind(db_kind, owner);

    let started = Instant::now();
    let conn = if db_kind.is_sqlite() {
        connect_sqlite(&url, &settings).await?
    } else {
        let mut opt = ConnectOptions::new(&url);
        opt.min_connections(settings.min_connections)
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout)
            .sqlx_logging(false);
        if let Some(idle) = settings.idle_timeout {
            opt.idle_timeout(idle);
        }
        if let Some(lifetime) = settings.max_lifetime {
            opt.max_lifetime(lifetime);
        }

        retry_connection(
            || {
                let opt = opt.clone();
                async move {
                    Database::connect(opt)
                        .await
                        .map_err(|e| DbInfraError::Connect {
                            message: format!("failed to connect to Postgres: {e}"),
                        })
                }
            },
            5,
            500,
        )
        .await?
    };

    info!(
        db_engine = get_db_engine(db_kind),
        db_url = %sanitize_db_url(&url),
        owner = ?owner,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database connected"
    );

    Ok(conn)
}

/// Build a SQLite pool on sqlx directly. `sea_orm::ConnectOptions` cannot
/// express "no idle timeout / no max lifetime", and the in-memory database
/// only lives as long as its one connection. Foreign keys are enabled on
/// every connection the pool opens.
async fn connect_sqlite(
    url: &str,
    settings: &PoolSettings,
) -> Result<DatabaseConnection, DbInfraError> {
    let connect_options = url
        .parse::<SqliteConnectOptions>()
        .map_err(|e| DbInfraError::Connect {
            message: format!("invalid SQLite connection spec: {e}"),
        })?
        .foreign_keys(true)
        .disable_statement_logging();

    let pool = SqlitePoolOptions::new()
        .min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect_with(connect_options)
        .await
        .map_err(|e| DbInfraError::Connect {
            message: format!("failed to connect to SQLite: {e}"),
        })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Run a migration command against the database selected by `env` and `db_kind`
/// using the owner credentials.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    if matches!(db_kind, DbKind::SqliteMemory) {
        return Err(DbInfraError::config(
            "in-memory SQLite cannot be migrated out of process; use bootstrap_db",
        ));
    }
    let admin = connect(env, db_kind, DbOwner::Owner).await?;
    migrate(&admin, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("{command:?} failed: {e}"),
        })
}

/// Single entrypoint for the application pool: connect, then bring the schema
/// up to date if it is behind.
///
/// SQLite migrates through the application pool itself (an in-memory database
/// only exists inside that pool); Postgres migrates through a short-lived
/// owner connection.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    let conn = connect(env, db_kind, DbOwner::App).await?;

    let current = is_schema_current(&conn)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("failed to read applied migrations: {e}"),
        })?;
    if current {
        info!(db_engine = get_db_engine(db_kind), "schema up to date");
        return Ok(conn);
    }

    if db_kind.is_sqlite() {
        migrate(&conn, MigrationCommand::Up)
            .await
            .map_err(|e| DbInfraError::Migration {
                message: format!("Up failed: {e}"),
            })?;
    } else {
        orchestrate_migration(env, db_kind, MigrationCommand::Up).await?;
    }

    Ok(conn)
}
