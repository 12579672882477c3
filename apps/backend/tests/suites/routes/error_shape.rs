use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use catalog_backend::config::db::RuntimeEnv;
use catalog_backend::AppState;
use serde_json::json;

use crate::common::assert_problem_details_structure;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn trace_id_matches_request_id_header() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/games/42").to_request()).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-request-id header should be present")
        .to_string();

    let body = assert_problem_details_structure(resp, 404, "GAME_NOT_FOUND").await;
    assert_eq!(body["trace_id"], request_id.as_str());
    assert_eq!(body["title"], "Game Not Found");
    Ok(())
}

#[actix_web::test]
async fn validation_error_matches_contract() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/games")
        .set_json(json!({"title": "Zelda"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::UNPROCESSABLE_ENTITY,
        Some("consoleId"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn missing_database_is_service_unavailable() {
    let state = AppState::new_without_db(RuntimeEnv::Test);
    let app = create_test_app(state).with_prod_routes().build().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/consoles").to_request()).await;
    assert_problem_details_structure(resp, 503, "DB_UNAVAILABLE").await;

    let req = test::TestRequest::post()
        .uri("/games")
        .set_json(json!({"title": "Zelda", "consoleId": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
