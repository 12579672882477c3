use backend_test_support::unique_helpers::unique_console_name;
use catalog_backend::services::consoles::ConsoleService;
use catalog_backend::{AppError, ErrorCode};

use crate::support::build_test_state;

#[tokio::test]
async fn create_and_fetch() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");
    let service = ConsoleService::new();

    let name = unique_console_name();
    let created = service.create(db, name.clone()).await?;
    assert_eq!(created.name, name);
    assert!(created.id > 0);

    let fetched = service.get(db, created.id).await?;
    assert_eq!(fetched, created);

    let all = service.list(db).await?;
    assert_eq!(all, vec![created]);
    Ok(())
}

#[tokio::test]
async fn duplicate_name_is_rejected_and_nothing_is_stored() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");
    let service = ConsoleService::new();

    service.create(db, "Nintendo".to_string()).await?;
    let err = service
        .create(db, "Nintendo".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConsoleNameTaken);
    assert_eq!(err.status().as_u16(), 409);

    assert_eq!(service.list(db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn names_are_case_sensitive() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");
    let service = ConsoleService::new();

    service.create(db, "Sega".to_string()).await?;
    service.create(db, "SEGA".to_string()).await?;
    assert_eq!(service.list(db).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn missing_console_maps_to_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    let err = ConsoleService::new().get(db, 999).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConsoleNotFound);
    assert_eq!(err.status().as_u16(), 404);
    Ok(())
}
