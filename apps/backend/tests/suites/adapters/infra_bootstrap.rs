use catalog_backend::config::db::{DbKind, RuntimeEnv};
use catalog_backend::AppError;
use db_infra::bootstrap_db;
use migration::{count_applied_migrations, is_schema_current, migrate, MigrationCommand};
use sea_orm::{ConnectionTrait, Statement};
use serial_test::serial;

#[tokio::test]
async fn bootstrap_applies_all_migrations() -> Result<(), AppError> {
    let db = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory).await?;

    assert!(is_schema_current(&db).await?);
    assert_eq!(count_applied_migrations(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn foreign_keys_are_enforced() -> Result<(), AppError> {
    let db = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory).await?;

    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA foreign_keys".to_string(),
        ))
        .await?
        .expect("pragma returns a row");
    let enabled: i32 = row.try_get_by_index(0)?;
    assert_eq!(enabled, 1);
    Ok(())
}

#[tokio::test]
async fn down_then_up_round_trips_schema() -> Result<(), AppError> {
    let db = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteMemory).await?;

    migrate(&db, MigrationCommand::Status).await?;

    migrate(&db, MigrationCommand::Down).await?;
    assert!(!is_schema_current(&db).await?);
    assert_eq!(count_applied_migrations(&db).await?, 0);

    migrate(&db, MigrationCommand::Up).await?;
    assert!(is_schema_current(&db).await?);
    Ok(())
}

#[tokio::test]
#[serial]
async fn sqlite_file_bootstrap_is_idempotent() -> Result<(), AppError> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog_test.db");
    std::env::set_var("TEST_SQLITE_FILE", &path);

    let first = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteFile).await?;
    assert!(is_schema_current(&first).await?);
    drop(first);
    assert!(path.exists());

    // Second start finds the schema current and leaves it alone.
    let second = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteFile).await?;
    assert_eq!(count_applied_migrations(&second).await?, 1);

    std::env::remove_var("TEST_SQLITE_FILE");
    Ok(())
}

#[tokio::test]
#[serial]
async fn sqlite_file_pool_enforces_foreign_keys_on_every_connection() -> Result<(), AppError> {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::env::set_var("TEST_SQLITE_FILE", dir.path().join("catalog_fk.db"));

    let db = bootstrap_db(RuntimeEnv::Test, DbKind::SqliteFile).await?;
    let pool = db.get_sqlite_connection_pool();

    // Hold every slot at once so each check runs on a distinct connection.
    let mut held = Vec::new();
    for _ in 0..pool.options().get_max_connections() {
        held.push(pool.acquire().await.expect("acquire pooled connection"));
    }
    for conn in held.iter_mut() {
        let enabled: i64 = sea_orm::sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&mut **conn)
            .await
            .expect("read foreign_keys pragma");
        assert_eq!(enabled, 1);
    }

    drop(held);
    std::env::remove_var("TEST_SQLITE_FILE");
    Ok(())
}
