use anubad_core::error::CoreError;
use anubad_providers::TranslateError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// User-facing message for the empty-input case.
pub const MSG_EMPTY_INPUT: &str = "Please enter some text to translate";

/// User-facing message when every provider failed.
pub const MSG_UNAVAILABLE: &str =
    "Translation services are currently unavailable. Please try again later.";

/// User-facing message when every provider timed out.
pub const MSG_TIMEOUT: &str = "Translation request timed out. Please try again.";

/// User-facing message when no provider connection could be established.
pub const MSG_CONNECTION: &str =
    "Unable to connect to translation service. Please check your internet connection.";

/// User-facing message for unexpected server-side failures.
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every error becomes a well-formed
/// `{"success": false, "error": ...}` JSON body; no error ever escapes to
/// the transport layer unformatted.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `anubad_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Every translation provider failed.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// The submitted text was empty after trimming.
    #[error("empty input")]
    EmptyInput,

    /// An internal error with a human-readable message (logged, not surfaced).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNEXPECTED.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Translation failures ---
            AppError::Translate(err) => classify_translate_error(err),

            // --- Input validation ---
            AppError::EmptyInput => (StatusCode::BAD_REQUEST, MSG_EMPTY_INPUT.to_string()),

            // --- Everything else: log the detail, return a generic message ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNEXPECTED.to_string())
            }
        };

        let body = json!({
            "success": false,
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an all-providers-failed error into an HTTP status and message.
///
/// - Every provider timed out -> 504 with the timeout message.
/// - Every provider failed to connect -> 503 with the connection message.
/// - Anything else (mixed or response-level failures) -> 503 unavailable.
fn classify_translate_error(err: &TranslateError) -> (StatusCode, String) {
    if err.all_timeouts() {
        (StatusCode::GATEWAY_TIMEOUT, MSG_TIMEOUT.to_string())
    } else if err.all_connect_errors() {
        (StatusCode::SERVICE_UNAVAILABLE, MSG_CONNECTION.to_string())
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, MSG_UNAVAILABLE.to_string())
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "A record with this value already exists".to_string(),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNEXPECTED.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_UNEXPECTED.to_string())
        }
    }
}
