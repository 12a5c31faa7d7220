//! The fallback sequencer: tries providers in fixed order until one succeeds.

use crate::error::ProviderError;
use crate::{ProviderKind, TranslationProvider};

/// A successful translation outcome.
#[derive(Debug, Clone)]
pub struct Translation {
    /// The translated text, already trimmed by the provider client.
    pub translated_text: String,
    /// Which provider produced it.
    pub provider: ProviderKind,
}

/// Error returned when every provider in the chain has failed.
///
/// Carries the per-provider failures so the HTTP layer can distinguish
/// all-timeout and all-connection outcomes from the general case.
#[derive(Debug, thiserror::Error)]
#[error("all translation providers failed")]
pub struct TranslateError {
    pub failures: Vec<(ProviderKind, ProviderError)>,
}

impl TranslateError {
    /// True when every provider failed with a timeout.
    pub fn all_timeouts(&self) -> bool {
        !self.failures.is_empty() && self.failures.iter().all(|(_, e)| e.is_timeout())
    }

    /// True when every provider failed to establish a connection.
    pub fn all_connect_errors(&self) -> bool {
        !self.failures.is_empty() && self.failures.iter().all(|(_, e)| e.is_connect())
    }
}

/// Sequencer that tries translation providers strictly in order.
///
/// The order is fixed at construction and providers are never raced in
/// parallel: the first provider is free while later ones may cost quota, so
/// a later provider is only contacted after every earlier one has
/// definitively failed. Each provider is attempted exactly once per call;
/// there is no retry, backoff, or circuit breaking.
pub struct FallbackTranslator {
    providers: Vec<Box<dyn TranslationProvider>>,
}

impl FallbackTranslator {
    pub fn new(providers: Vec<Box<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    /// Translate `text`, returning the first provider's successful result.
    ///
    /// `text` must be non-empty after trimming; the HTTP boundary performs
    /// that check once before calling in. Every provider failure is logged
    /// with the provider identity before the next provider is tried.
    pub async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        let mut failures = Vec::new();

        for provider in &self.providers {
            let kind = provider.kind();
            tracing::info!(provider = %kind, "attempting translation");

            match provider.translate(text).await {
                Ok(translated_text) => {
                    tracing::info!(provider = %kind, "translation succeeded");
                    return Ok(Translation {
                        translated_text,
                        provider: kind,
                    });
                }
                Err(err) => {
                    tracing::warn!(provider = %kind, error = %err, "translation provider failed");
                    failures.push((kind, err));
                }
            }
        }

        Err(TranslateError { failures })
    }
}
