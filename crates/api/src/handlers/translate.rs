//! Handler for `POST /translate`.
//!
//! Validates the input once, runs the provider fallback sequencer, records
//! history best-effort for authenticated callers, and maps the outcome to
//! the response contract.

use anubad_db::models::translation::CreateTranslation;
use anubad_providers::{ProviderKind, Translation};
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// Request body for `POST /translate`.
///
/// A missing `text` field is treated the same as an empty one.
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
}

/// Success body for `POST /translate`.
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translated_text: String,
    pub original_text: String,
    /// Which provider produced the result (`"MyMemory"` or `"LibreTranslate"`).
    pub service: ProviderKind,
}

/// POST /translate
///
/// Translate English text to Assamese. Works for anonymous callers;
/// authenticated callers additionally get a history record.
pub async fn translate(
    maybe_user: MaybeAuthUser,
    State(state): State<AppState>,
    Json(input): Json<TranslateRequest>,
) -> AppResult<Json<TranslateResponse>> {
    // The single upstream emptiness check; providers rely on it.
    let text = input.text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyInput);
    }

    let translation = state.translator.translate(text).await?;

    // History is a convenience feature: its outcome never changes the response.
    record_history(&state, maybe_user.0.as_ref(), text, &translation).await;

    Ok(Json(TranslateResponse {
        success: true,
        translated_text: translation.translated_text,
        original_text: text.to_string(),
        service: translation.provider,
    }))
}

/// Best-effort history write, scoped to authenticated callers.
///
/// A storage failure is logged and swallowed.
async fn record_history(
    state: &AppState,
    user: Option<&AuthUser>,
    original_text: &str,
    translation: &Translation,
) {
    let Some(user) = user else { return };

    let input = CreateTranslation {
        user_id: user.user_id,
        original_text,
        translated_text: &translation.translated_text,
        service_used: translation.provider.as_str(),
    };

    if let Err(err) = state.history.record(&input).await {
        tracing::error!(
            user_id = user.user_id,
            error = %err,
            "failed to save translation history"
        );
    }
}
