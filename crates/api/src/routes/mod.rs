//! Route definitions.
//!
//! The public surface is flat (no version prefix):
//!
//! ```text
//! GET  /                  translation page
//! GET  /health            service health
//! POST /translate         translate English text to Assamese
//! GET  /history           authenticated caller's translation history
//! POST /auth/register
//! POST /auth/login
//! POST /auth/refresh
//! POST /auth/logout
//! GET  /auth/me
//! ```

pub mod auth;
pub mod health;
pub mod history;
pub mod pages;
pub mod translate;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(health::router())
        .merge(translate::router())
        .merge(history::router())
        .nest("/auth", auth::router())
}
