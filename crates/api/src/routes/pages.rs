//! Route definition for the static translation page.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(pages::index))
}
