//! Client for Gemini-compatible `generateContent` endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use super::TextGenerator;
use crate::error::MotivationError;
use crate::storage::MotivationConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http_client: Client,
    url: Url,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    /// Builds a client for the configured endpoint and model.
    ///
    /// A missing key is not an error here; every request fails with
    /// [`MotivationError::MissingApiKey`] instead.
    pub fn new(config: &MotivationConfig, api_key: Option<String>) -> Result<Self, MotivationError> {
        let mut url = Url::parse(&config.endpoint)?;
        let method = format!("{}:generateContent", config.model);
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["v1beta", "models", method.as_str()]);

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            url,
            api_key,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, MotivationError> {
        let api_key = self.api_key.as_deref().ok_or(MotivationError::MissingApiKey)?;

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        tracing::debug!(url = %self.url, "requesting motivational phrase");
        let resp = self
            .http_client
            .post(self.url.clone())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(MotivationError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| MotivationError::Malformed(e.to_string()))?;

        let Some(content) = parsed.candidates.into_iter().next().and_then(|c| c.content) else {
            return Ok(None);
        };
        let joined: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        Ok((!joined.is_empty()).then_some(joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motivation::{MotivationProvider, FAILURE_QUOTE};

    const PATH: &str = "/v1beta/models/test-model:generateContent";

    fn config(endpoint: String) -> MotivationConfig {
        MotivationConfig {
            endpoint,
            model: "test-model".into(),
            ..MotivationConfig::default()
        }
    }

    #[test]
    fn url_keeps_endpoint_prefix() {
        let client = GeminiClient::new(&config("https://proxy.local/gemini/".into()), None).unwrap();
        assert_eq!(
            client.url().as_str(),
            "https://proxy.local/gemini/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let result = GeminiClient::new(&config("not a url".into()), None);
        assert!(matches!(result, Err(MotivationError::Endpoint(_))));
    }

    #[tokio::test]
    async fn concatenates_text_parts_of_first_candidate() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header(API_KEY_HEADER, "secret")
            .match_body(mockito::Matcher::PartialJson(json!({
                "contents": [{ "parts": [{ "text": "hello" }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"Um passo "},{"text":"de cada vez."}]}}]}"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::new(&config(server.url()), Some("secret".into())).unwrap();
        let text = client.generate("hello").await.unwrap();
        assert_eq!(text.as_deref(), Some("Um passo de cada vez."));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn no_candidates_is_no_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(&config(server.url()), Some("k".into())).unwrap();
        assert_eq!(client.generate("x").await.unwrap(), None);
    }

    #[tokio::test]
    async fn error_status_and_garbage_are_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;
        let client = GeminiClient::new(&config(server.url()), Some("k".into())).unwrap();
        assert!(matches!(
            client.generate("x").await,
            Err(MotivationError::Status { status: 503, .. })
        ));

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;
        let client = GeminiClient::new(&config(server.url()), Some("k".into())).unwrap();
        assert!(matches!(
            client.generate("x").await,
            Err(MotivationError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        let client = GeminiClient::new(&config(server.url()), None).unwrap();
        assert!(matches!(
            client.generate("x").await,
            Err(MotivationError::MissingApiKey)
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn provider_falls_back_on_server_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let cfg = config(server.url());
        let client = GeminiClient::new(&cfg, Some("k".into())).unwrap();
        let quote = MotivationProvider::new(client, &cfg)
            .motivational_quote(&["Ler"])
            .await;
        assert_eq!(quote, FAILURE_QUOTE);
        mock.assert_async().await;
    }
}
