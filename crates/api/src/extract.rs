//! Request extractors whose rejections are mapped into [`AppError`].

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor for handlers.
///
/// Behaves like [`axum::Json`] except that a body that fails to parse is
/// answered with the standard `{"success": false, "error": ...}` envelope
/// instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
