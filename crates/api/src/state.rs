use std::sync::Arc;

use anubad_providers::FallbackTranslator;

use crate::config::ServerConfig;
use crate::history::HistoryRecorder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: anubad_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The provider fallback sequencer (MyMemory first, then LibreTranslate).
    pub translator: Arc<FallbackTranslator>,
    /// Write side of translation history.
    pub history: Arc<dyn HistoryRecorder>,
}
