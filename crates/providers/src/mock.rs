//! Mock provider for exercising the fallback sequencer without a network.
//!
//! Used by the unit tests in this crate and by the API integration tests,
//! so it is a regular public module rather than `#[cfg(test)]`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::{ProviderKind, TranslationProvider};

/// What a [`MockProvider`] does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return this translated text.
    Succeed(String),
    /// Always fail with a clone of this error.
    Fail(ProviderError),
}

/// In-memory provider with scripted behavior and a call counter.
pub struct MockProvider {
    kind: ProviderKind,
    behavior: MockBehavior,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(kind: ProviderKind, behavior: MockBehavior) -> Self {
        Self {
            kind,
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A provider that always succeeds with `text`.
    pub fn succeeding(kind: ProviderKind, text: &str) -> Self {
        Self::new(kind, MockBehavior::Succeed(text.to_string()))
    }

    /// A provider that always fails with `error`.
    pub fn failing(kind: ProviderKind, error: ProviderError) -> Self {
        Self::new(kind, MockBehavior::Fail(error))
    }

    /// Shared handle to the call counter, usable after the provider has
    /// been boxed into a [`crate::FallbackTranslator`].
    pub fn calls_handle(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn translate(&self, _text: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Succeed(text) => Ok(text.clone()),
            MockBehavior::Fail(error) => Err(error.clone()),
        }
    }
}
