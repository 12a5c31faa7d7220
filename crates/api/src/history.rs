//! Translation history recording.
//!
//! The write side of history sits behind a trait so the handler logic can be
//! exercised against an in-memory recorder; reads go through
//! [`TranslationRepo`] directly.

use anubad_db::models::translation::CreateTranslation;
use anubad_db::repositories::TranslationRepo;
use anubad_db::DbPool;
use async_trait::async_trait;

/// Sink for successful translations.
#[async_trait]
pub trait HistoryRecorder: Send + Sync {
    /// Persist one history row.
    async fn record(&self, input: &CreateTranslation<'_>) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed recorder used in production.
pub struct PgHistoryRecorder {
    pool: DbPool,
}

impl PgHistoryRecorder {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRecorder for PgHistoryRecorder {
    async fn record(&self, input: &CreateTranslation<'_>) -> Result<(), sqlx::Error> {
        TranslationRepo::create(&self.pool, input).await.map(|_| ())
    }
}
