//! Route definition for `POST /translate`.

use axum::routing::post;
use axum::Router;

use crate::handlers::translate;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/translate", post(translate::translate))
}
