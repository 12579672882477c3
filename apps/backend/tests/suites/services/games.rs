use backend_test_support::unique_helpers::{unique_console_name, unique_game_title};
use catalog_backend::services::games::GameService;
use catalog_backend::{AppError, ErrorCode};

use crate::support::build_test_state;
use crate::support::factory::{create_console, create_game};

#[tokio::test]
async fn create_links_game_to_console() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");
    let console = create_console(db, &unique_console_name()).await?;
    let service = GameService::new();

    let title = unique_game_title();
    let game = service.create(db, title.clone(), Some(console.id)).await?;
    assert_eq!(game.title, title);
    assert_eq!(game.console_id, console.id);

    assert_eq!(service.get(db, game.id).await?, game);
    Ok(())
}

#[tokio::test]
async fn unknown_console_is_conflict_and_nothing_is_stored() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");
    let service = GameService::new();

    let err = service
        .create(db, "Orphan".to_string(), Some(4242))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownConsole);
    assert_eq!(err.status().as_u16(), 409);

    assert!(service.list(db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn out_of_range_console_id_is_unknown_console() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    let err = GameService::new()
        .create(db, "Orphan".to_string(), None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownConsole);
    Ok(())
}

#[tokio::test]
async fn duplicate_title_is_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");
    let console = create_console(db, "Nintendo").await?;
    create_game(db, "Zelda", console.id).await?;

    let err = GameService::new()
        .create(db, "Zelda".to_string(), Some(console.id))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameTitleTaken);
    Ok(())
}

#[tokio::test]
async fn list_is_ordered_by_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");
    let console = create_console(db, "Nintendo").await?;
    let service = GameService::new();

    let a = service.create(db, "Metroid".to_string(), Some(console.id)).await?;
    let b = service.create(db, "Kirby".to_string(), Some(console.id)).await?;

    let ids: Vec<i64> = service.list(db).await?.into_iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
    assert!(a.id < b.id);
    Ok(())
}

#[tokio::test]
async fn missing_game_maps_to_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database");

    let err = GameService::new().get(db, 1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::GameNotFound);
    Ok(())
}
