use actix_web::http::StatusCode;
use actix_web::test;
use catalog_backend::config::db::RuntimeEnv;
use catalog_backend::AppState;
use migration::{migrate, MigrationCommand};
use serde_json::Value;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_reports_database_and_migrations() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251019_000001_init");
    assert_eq!(body["schema_current"], true);
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body.get("db_error").is_none());
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));
    Ok(())
}

#[actix_web::test]
async fn health_without_database_still_answers() {
    let state = AppState::new_without_db(RuntimeEnv::Test);
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["db"], "error");
    assert_eq!(body["schema_current"], false);
    assert_eq!(body["migrations"], "unknown");
    assert!(body["db_error"].as_str().is_some());
}

#[actix_web::test]
async fn health_is_degraded_when_schema_is_behind() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().expect("test state has a database").clone();
    migrate(&db, MigrationCommand::Down).await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["schema_current"], false);
    assert_eq!(body["migrations"], "no_migrations");
    Ok(())
}
