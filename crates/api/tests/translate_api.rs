//! Integration tests for `POST /translate`.
//!
//! These drive the full router with mock providers, so they cover input
//! validation, the fallback order, error classification, and the
//! best-effort history behavior without any network or database.

mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use serde_json::json;

use anubad_providers::error::ProviderError;
use anubad_providers::mock::MockProvider;
use anubad_providers::{FallbackTranslator, ProviderKind};

fn translator(primary: MockProvider, secondary: MockProvider) -> FallbackTranslator {
    FallbackTranslator::new(vec![Box::new(primary), Box::new(secondary)])
}

// ---------------------------------------------------------------------------
// Test: primary provider success returns the exact documented body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hello_translated_by_mymemory() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "নমস্কাৰ");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");
    let secondary_calls = secondary.calls_handle();

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({ "text": "Hello" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "translated_text": "নমস্কাৰ",
            "original_text": "Hello",
            "service": "MyMemory"
        })
    );
    assert_eq!(
        secondary_calls.load(Ordering::SeqCst),
        0,
        "LibreTranslate must not be contacted when MyMemory succeeds"
    );
}

// ---------------------------------------------------------------------------
// Test: empty input returns 400 without any provider call
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_input_returns_400() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "unused");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");
    let primary_calls = primary.calls_handle();
    let secondary_calls = secondary.calls_handle();

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({ "text": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = common::body_json(response).await;
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Please enter some text to translate"
        })
    );
    assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_only_input_returns_400() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "unused");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");
    let primary_calls = primary.calls_handle();

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({ "text": "   \n\t " })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_json_body_returns_json_envelope() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "unused");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");
    let primary_calls = primary.calls_handle();

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_raw(app, "/translate", "{not valid json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The body must parse as JSON and carry the standard envelope.
    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
    assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_text_field_returns_400() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "unused");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["error"], "Please enter some text to translate");
}

// ---------------------------------------------------------------------------
// Test: fallback to LibreTranslate when MyMemory fails
// ---------------------------------------------------------------------------

#[tokio::test]
async fn falls_back_to_libretranslate() {
    let primary = MockProvider::failing(ProviderKind::MyMemory, ProviderError::Status(500));
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "ধন্যবাদ");

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({ "text": "Thank you" })).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["service"], "LibreTranslate");
    assert_eq!(body["translated_text"], "ধন্যবাদ");
    assert_eq!(body["original_text"], "Thank you");
}

// ---------------------------------------------------------------------------
// Test: both providers failing returns 503
// ---------------------------------------------------------------------------

#[tokio::test]
async fn both_providers_failing_returns_503() {
    let primary = MockProvider::failing(
        ProviderKind::MyMemory,
        ProviderError::Rejected("responseStatus 403".into()),
    );
    let secondary =
        MockProvider::failing(ProviderKind::LibreTranslate, ProviderError::Status(429));

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({ "text": "Hello" })).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = common::body_json(response).await;
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Translation services are currently unavailable. Please try again later."
        })
    );
}

// ---------------------------------------------------------------------------
// Test: timeout / connection classification
// ---------------------------------------------------------------------------

#[tokio::test]
async fn both_providers_timing_out_returns_504() {
    let primary = MockProvider::failing(ProviderKind::MyMemory, ProviderError::Timeout);
    let secondary = MockProvider::failing(ProviderKind::LibreTranslate, ProviderError::Timeout);

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({ "text": "Hello" })).await;

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Translation request timed out. Please try again."
    );
}

#[tokio::test]
async fn both_providers_unreachable_returns_503_connection_error() {
    let primary = MockProvider::failing(
        ProviderKind::MyMemory,
        ProviderError::Connect("connection refused".into()),
    );
    let secondary = MockProvider::failing(
        ProviderKind::LibreTranslate,
        ProviderError::Connect("connection refused".into()),
    );

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json(app, "/translate", json!({ "text": "Hello" })).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Unable to connect to translation service. Please check your internet connection."
    );
}

// ---------------------------------------------------------------------------
// Test: best-effort history never affects the translation response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_write_failure_does_not_affect_translation_response() {
    // The test pool points at an unreachable address, so the history insert
    // for this authenticated caller is guaranteed to fail.
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "নমস্কাৰ");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");

    let app = common::build_test_app(translator(primary, secondary));
    let token = common::auth_token(7);
    let response =
        common::post_json_auth(app, "/translate", json!({ "text": "Hello" }), &token).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(
        body,
        json!({
            "success": true,
            "translated_text": "নমস্কাৰ",
            "original_text": "Hello",
            "service": "MyMemory"
        })
    );
}

// ---------------------------------------------------------------------------
// Test: history is written exactly once on success, and only for
// authenticated callers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn authenticated_success_is_recorded_exactly_once() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "নমস্কাৰ");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");

    let history = common::RecordingHistory::new();
    let records = history.records_handle();

    let app = common::build_test_app_with_history(
        translator(primary, secondary),
        std::sync::Arc::new(history),
    );
    let token = common::auth_token(7);
    let response =
        common::post_json_auth(app, "/translate", json!({ "text": "  Hello  " }), &token).await;

    assert_eq!(response.status(), StatusCode::OK);

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 1, "exactly one history row per success");
    assert_eq!(records[0].user_id, 7);
    assert_eq!(records[0].original_text, "Hello", "input is trimmed before recording");
    assert_eq!(records[0].translated_text, "নমস্কাৰ");
    assert_eq!(records[0].service_used, "MyMemory");
}

#[tokio::test]
async fn anonymous_success_is_not_recorded() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "নমস্কাৰ");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");

    let history = common::RecordingHistory::new();
    let records = history.records_handle();

    let app = common::build_test_app_with_history(
        translator(primary, secondary),
        std::sync::Arc::new(history),
    );
    let response = common::post_json(app, "/translate", json!({ "text": "Hello" })).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        records.lock().unwrap().is_empty(),
        "anonymous calls must not write history"
    );
}

#[tokio::test]
async fn failed_translation_is_not_recorded() {
    let primary = MockProvider::failing(ProviderKind::MyMemory, ProviderError::Timeout);
    let secondary =
        MockProvider::failing(ProviderKind::LibreTranslate, ProviderError::Status(500));

    let history = common::RecordingHistory::new();
    let records = history.records_handle();

    let app = common::build_test_app_with_history(
        translator(primary, secondary),
        std::sync::Arc::new(history),
    );
    let token = common::auth_token(7);
    let response =
        common::post_json_auth(app, "/translate", json!({ "text": "Hello" }), &token).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(
        records.lock().unwrap().is_empty(),
        "failed translations must not write history"
    );
}

// ---------------------------------------------------------------------------
// Test: a present-but-invalid bearer token is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_bearer_token_is_rejected() {
    let primary = MockProvider::succeeding(ProviderKind::MyMemory, "unused");
    let secondary = MockProvider::succeeding(ProviderKind::LibreTranslate, "unused");
    let primary_calls = primary.calls_handle();

    let app = common::build_test_app(translator(primary, secondary));
    let response = common::post_json_auth(
        app,
        "/translate",
        json!({ "text": "Hello" }),
        "not-a-real-token",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        primary_calls.load(Ordering::SeqCst),
        0,
        "rejected requests must not reach the providers"
    );
}
