//! Integration tests for `GET /history` authentication behavior.
//!
//! The happy path (listing stored rows) needs a live database and is
//! exercised against a real deployment; these tests cover the access
//! control and failure shaping that work without one.

mod common;

use axum::http::StatusCode;

use anubad_providers::mock::MockProvider;
use anubad_providers::{FallbackTranslator, ProviderKind};

fn app() -> axum::Router {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "unused");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");
    common::build_test_app(FallbackTranslator::new(vec![
        Box::new(primary),
        Box::new(secondary),
    ]))
}

#[tokio::test]
async fn history_without_token_returns_401() {
    let response = common::get(app(), "/history").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing Authorization header");
}

#[tokio::test]
async fn history_with_malformed_header_returns_401() {
    let response = common::get_auth(app(), "/history", "").await;

    // An empty bearer token fails validation.
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn history_with_invalid_token_returns_401() {
    let response = common::get_auth(app(), "/history", "bogus.token.value").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn history_with_unreachable_database_returns_500_json() {
    // The token is valid, so the handler reaches the (unreachable) database;
    // the resulting error must still be a well-formed JSON body.
    let token = common::auth_token(7);
    let response = common::get_auth(app(), "/history", &token).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "An unexpected error occurred. Please try again.");
}
