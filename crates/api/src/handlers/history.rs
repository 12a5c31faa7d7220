//! Handler for `GET /history`.

use anubad_db::models::translation::Translation;
use anubad_db::repositories::TranslationRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum number of history rows returned.
const HISTORY_LIMIT: i64 = 50;

/// GET /history
///
/// List the authenticated caller's most recent translations, newest first.
pub async fn list_history(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Translation>>>> {
    let translations =
        TranslationRepo::list_for_user(&state.pool, auth.user_id, HISTORY_LIMIT).await?;

    Ok(Json(DataResponse { data: translations }))
}
