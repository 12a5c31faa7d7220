//! Repository for the `translations` table.
//!
//! Translation history is insert-only: rows are written once for each
//! successful translation and never updated or deleted by the service.

use anubad_core::types::DbId;
use sqlx::PgPool;

use crate::models::translation::{CreateTranslation, Translation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, original_text, translated_text, service_used, created_at";

/// Provides insert and listing for translation history.
pub struct TranslationRepo;

impl TranslationRepo {
    /// Record a successful translation, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTranslation<'_>,
    ) -> Result<Translation, sqlx::Error> {
        let query = format!(
            "INSERT INTO translations (user_id, original_text, translated_text, service_used)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Translation>(&query)
            .bind(input.user_id)
            .bind(input.original_text)
            .bind(input.translated_text)
            .bind(input.service_used)
            .fetch_one(pool)
            .await
    }

    /// List a user's most recent translations, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Translation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM translations
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Translation>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
