//! Static page serving.

use axum::response::Html;

/// GET / -- the translation page (embedded at compile time).
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
