//! Translation provider clients and the fallback sequencer.
//!
//! Two external providers are supported:
//! - [`mymemory`] -- MyMemory (free, no API key), tried first.
//! - [`libretranslate`] -- LibreTranslate (API key optional), tried second.
//!
//! Both implement [`TranslationProvider`]; the [`fallback`] module chains
//! them in fixed order. Expected failures (timeouts, bad statuses, malformed
//! bodies) are explicit [`ProviderError`] values, never panics.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

pub mod error;
pub mod fallback;
pub mod libretranslate;
pub mod mock;
pub mod mymemory;

pub use error::ProviderError;
pub use fallback::{FallbackTranslator, TranslateError, Translation};

/// Fixed source language for every provider call.
pub const SOURCE_LANG: &str = "en";

/// Fixed target language (Assamese).
pub const TARGET_LANG: &str = "as";

/// Per-call timeout applied to each outbound provider request.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Identity of an external translation provider.
///
/// Serializes (and displays) as exactly `"MyMemory"` or `"LibreTranslate"`,
/// which is also the string persisted in translation history rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProviderKind {
    MyMemory,
    LibreTranslate,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::MyMemory => "MyMemory",
            ProviderKind::LibreTranslate => "LibreTranslate",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common interface implemented by every translation provider client.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Which provider this client talks to.
    fn kind(&self) -> ProviderKind;

    /// Translate English text to Assamese.
    ///
    /// Callers must pass text that is non-empty after trimming; that check
    /// is performed once at the HTTP boundary, not per provider. Returns the
    /// trimmed translated text, or a [`ProviderError`] describing why this
    /// provider could not produce one.
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;
}
