//! Failure modes of a single provider call.

/// Why one provider failed to produce a translation.
///
/// These are expected failures: the sequencer logs them and moves on to the
/// next provider, so none of them should ever surface as a panic.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// The request exceeded the per-call timeout.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport-level failure (TLS, request building, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body was not valid JSON or did not match the expected
    /// shape. Shape mismatches fail closed into this variant.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The body parsed but the provider signalled failure in-band
    /// (e.g. a non-200 `responseStatus` field).
    #[error("provider rejected the request: {0}")]
    Rejected(String),

    /// The translated-text field was missing or empty after trimming.
    #[error("provider returned an empty translation")]
    Empty,
}

impl ProviderError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Timeout)
    }

    pub fn is_connect(&self) -> bool {
        matches!(self, ProviderError::Connect(_))
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_connect() {
            ProviderError::Connect(err.to_string())
        } else if err.is_decode() {
            ProviderError::Decode(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}
