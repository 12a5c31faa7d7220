//! Client for the MyMemory translation API.
//!
//! MyMemory is free and requires no API key, which is why it is always tried
//! first. The request is a GET with `q` and `langpair` query parameters; the
//! response carries its own `responseStatus` field that must equal 200 in
//! addition to the HTTP status.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::{ProviderKind, TranslationProvider, PROVIDER_TIMEOUT, SOURCE_LANG, TARGET_LANG};

/// Production endpoint for MyMemory.
pub const DEFAULT_API_URL: &str = "https://api.mymemory.translated.net/get";

/// HTTP client for the MyMemory API.
pub struct MyMemoryClient {
    client: reqwest::Client,
    api_url: String,
}

/// Top-level MyMemory response shape. Anything that does not decode into
/// this fails closed as [`ProviderError::Decode`].
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseStatus")]
    response_status: i64,
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl MyMemoryClient {
    /// Create a client targeting `api_url` (see [`DEFAULT_API_URL`]).
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Decode a raw response body into the translated text.
    fn decode(body: &str) -> Result<String, ProviderError> {
        let parsed: MyMemoryResponse =
            serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        if parsed.response_status != 200 {
            return Err(ProviderError::Rejected(format!(
                "responseStatus {}",
                parsed.response_status
            )));
        }

        let text = parsed
            .response_data
            .and_then(|d| d.translated_text)
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::MyMemory
    }

    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let langpair = format!("{SOURCE_LANG}|{TARGET_LANG}");

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", &langpair)])
            .timeout(PROVIDER_TIMEOUT)
            .send()
            .await?;

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
        let body = r#"{
            "responseStatus": 200,
            "responseData": { "translatedText": "  নমস্কাৰ  " }
        }"#;
        assert_eq!(MyMemoryClient::decode(body).unwrap(), "নমস্কাৰ");
    }

    #[test]
    fn decode_rejects_non_200_response_status() {
        let body = r#"{
            "responseStatus": 403,
            "responseData": { "translatedText": "QUOTA EXCEEDED" }
        }"#;
        assert_matches!(
            MyMemoryClient::decode(body),
            Err(ProviderError::Rejected(detail)) if detail.contains("403")
        );
    }

    #[test]
    fn decode_treats_empty_translation_as_failure() {
        let body = r#"{
            "responseStatus": 200,
            "responseData": { "translatedText": "   " }
        }"#;
        assert_matches!(MyMemoryClient::decode(body), Err(ProviderError::Empty));
    }

    #[test]
    fn decode_treats_missing_response_data_as_failure() {
        let body = r#"{ "responseStatus": 200 }"#;
        assert_matches!(MyMemoryClient::decode(body), Err(ProviderError::Empty));
    }

    #[test]
    fn decode_fails_closed_on_malformed_json() {
        assert_matches!(
            MyMemoryClient::decode("<html>not json</html>"),
            Err(ProviderError::Decode(_))
        );
    }

    #[test]
    fn decode_fails_closed_on_shape_mismatch() {
        // responseStatus as a string does not match the schema.
        let body = r#"{ "responseStatus": "200", "responseData": {} }"#;
        assert_matches!(MyMemoryClient::decode(body), Err(ProviderError::Decode(_)));
    }
}
