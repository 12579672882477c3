use std::env;
use std::str::FromStr;

use db_infra::db::{DbKind, RuntimeEnv};

use crate::error::AppError;

/// Bind address and database selection for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_kind: DbKind,
    pub env: RuntimeEnv,
}

impl ServerConfig {
    /// Read `BACKEND_HOST`, `BACKEND_PORT` and `CATALOG_DB_KIND`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => 3001,
        };
        let db_kind = match env::var("CATALOG_DB_KIND") {
            Ok(raw) => DbKind::from_str(&raw)?,
            Err(_) => DbKind::Postgres,
        };

        Ok(Self {
            host,
            port,
            db_kind,
            env: RuntimeEnv::Prod,
        })
    }
}
