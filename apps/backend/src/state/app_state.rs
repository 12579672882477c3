use db_infra::db::{DbKind, RuntimeEnv};
use sea_orm::DatabaseConnection;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent for state built without a database)
    db: Option<DatabaseConnection>,
    /// Where the process runs
    env: RuntimeEnv,
    /// Engine behind `db`, if any
    db_kind: Option<DbKind>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection, env: RuntimeEnv, db_kind: DbKind) -> Self {
        Self {
            db: Some(db),
            env,
            db_kind: Some(db_kind),
        }
    }

    /// Create a new AppState without a database connection
    pub fn new_without_db(env: RuntimeEnv) -> Self {
        Self {
            db: None,
            env,
            db_kind: None,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn env(&self) -> RuntimeEnv {
        self.env
    }

    pub fn db_kind(&self) -> Option<DbKind> {
        self.db_kind
    }
}
