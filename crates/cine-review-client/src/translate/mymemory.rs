use crate::translate::{TranslateError, TranslationProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.mymemory.translated.net";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Free-tier MyMemory translation endpoint, called directly with no API key
/// and no rate-limit handling.
#[derive(Clone)]
pub struct MyMemoryProvider {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseStatus")]
    response_status: i64,
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemoryProvider {
    pub fn new() -> Result<Self, TranslateError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, TranslateError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let langpair = format!("{source}|{target}");
        debug!("MyMemory request: {} chars, langpair {}", text.chars().count(), langpair);

        let response = self
            .http
            .get(format!("{}/get", self.base_url))
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::Provider(format!(
                "MyMemory returned HTTP {}",
                response.status()
            )));
        }

        let body: MyMemoryResponse = response.json().await?;
        match body.response_data {
            Some(data) if body.response_status == 200 => Ok(data.translated_text),
            _ => Err(TranslateError::Provider(format!(
                "MyMemory response status {}",
                body.response_status
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn parses_successful_translation() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/get")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "Hello".into()),
                mockito::Matcher::UrlEncoded("langpair".into(), "en|hi".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "responseStatus": 200,
                    "responseData": {"translatedText": "नमस्ते"}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let provider = MyMemoryProvider::with_base_url(&server.url()).unwrap();
        let translated = provider.translate("Hello", "en", "hi").await.unwrap();
        assert_eq!(translated, "नमस्ते");
    }

    #[tokio::test]
    async fn non_200_response_status_is_a_provider_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/get")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"responseStatus": 403, "responseData": null}).to_string())
            .create_async()
            .await;

        let provider = MyMemoryProvider::with_base_url(&server.url()).unwrap();
        let err = provider.translate("Hello", "en", "hi").await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider(_)));
    }
}
