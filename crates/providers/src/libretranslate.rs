//! Client for the LibreTranslate API.
//!
//! LibreTranslate is the second provider in the fallback chain. The request
//! is a JSON POST; an API key, when configured, is sent as a bearer token.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::{ProviderKind, TranslationProvider, PROVIDER_TIMEOUT, SOURCE_LANG, TARGET_LANG};

/// Production endpoint for LibreTranslate.
pub const DEFAULT_API_URL: &str = "https://libretranslate.com/translate";

/// HTTP client for the LibreTranslate API.
pub struct LibreTranslateClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

/// Request body for the `/translate` endpoint.
#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'static str,
    target: &'static str,
    format: &'static str,
}

/// Response shape. A missing or empty `translatedText` is a failure.
#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl LibreTranslateClient {
    /// Create a client targeting `api_url` (see [`DEFAULT_API_URL`]).
    /// `api_key` is optional; the public instance rate-limits keyless calls.
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }

    /// Decode a raw response body into the translated text.
    fn decode(body: &str) -> Result<String, ProviderError> {
        let parsed: LibreTranslateResponse =
            serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        let text = parsed.translated_text.unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::LibreTranslate
    }

    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let body = TranslateBody {
            q: text,
            source: SOURCE_LANG,
            target: TARGET_LANG,
            format: "text",
        };

        let mut request = self
            .client
            .post(&self.api_url)
            .json(&body)
            .timeout(PROVIDER_TIMEOUT);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Self::decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn decode_accepts_successful_response() {
        let body = r#"{ "translatedText": " ধন্যবাদ " }"#;
        assert_eq!(LibreTranslateClient::decode(body).unwrap(), "ধন্যবাদ");
    }

    #[test]
    fn decode_treats_missing_field_as_failure() {
        let body = r#"{ "error": "Invalid API key" }"#;
        assert_matches!(LibreTranslateClient::decode(body), Err(ProviderError::Empty));
    }

    #[test]
    fn decode_treats_empty_translation_as_failure() {
        let body = r#"{ "translatedText": "" }"#;
        assert_matches!(LibreTranslateClient::decode(body), Err(ProviderError::Empty));
    }

    #[test]
    fn decode_fails_closed_on_malformed_json() {
        assert_matches!(
            LibreTranslateClient::decode("translated"),
            Err(ProviderError::Decode(_))
        );
    }

    #[test]
    fn request_body_serializes_expected_fields() {
        let body = TranslateBody {
            q: "Hello",
            source: SOURCE_LANG,
            target: TARGET_LANG,
            format: "text",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "q": "Hello",
                "source": "en",
                "target": "as",
                "format": "text"
            })
        );
    }
}
