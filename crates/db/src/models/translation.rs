//! Translation history model and DTOs.

use anubad_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `translations` table.
///
/// Rows exist only for successful translations and are immutable once
/// created. `user_id` is nullable at the schema level but the service only
/// writes rows for authenticated users.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Translation {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub original_text: String,
    pub translated_text: String,
    /// Which provider produced the result (`"MyMemory"` or `"LibreTranslate"`).
    pub service_used: String,
    pub created_at: Timestamp,
}

/// DTO for recording a successful translation.
pub struct CreateTranslation<'a> {
    pub user_id: DbId,
    pub original_text: &'a str,
    pub translated_text: &'a str,
    pub service_used: &'a str,
}
