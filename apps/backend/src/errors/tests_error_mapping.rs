// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let app: AppError = DomainError::validation("name must not be empty").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let name = DomainError::conflict(ConflictKind::ConsoleName, "name taken");
    let app: AppError = name.into();
    assert_eq!(app.code().as_str(), "CONSOLE_NAME_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let title = DomainError::conflict(ConflictKind::GameTitle, "title taken");
    let app: AppError = title.into();
    assert_eq!(app.code().as_str(), "GAME_TITLE_TAKEN");
    assert_eq!(app.status().as_u16(), 409);

    let fk = DomainError::conflict(ConflictKind::UnknownConsole, "no console 9");
    let app: AppError = fk.into();
    assert_eq!(app.code().as_str(), "UNKNOWN_CONSOLE");
    assert_eq!(app.status().as_u16(), 409);

    // Generic conflict fallback
    let other = DomainError::conflict(ConflictKind::Other("Unique".to_string()), "dup");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Console, "no console").into();
    assert_eq!(app.code().as_str(), "CONSOLE_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError =
        DomainError::not_found(NotFoundKind::Other("Record".into()), "gone").into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError =
        DomainError::infra(InfraErrorKind::Other("DbErr".to_string()), "boom").into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}
