//! HTTP client for the `chat/completions` endpoint of an OpenAI-compatible
//! provider.
//!
//! Two entry points: [`LlmClient::complete`] for free-text answers and
//! [`LlmClient::complete_json`] which requests JSON-object output. Both
//! return the raw completion text; parsing what the model said is the
//! caller's business.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::LlmError;
use crate::types::{ApiErrorEnvelope, ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// Low temperatures: the callers want grounded synthesis, not creativity.
const TEXT_TEMPERATURE: f32 = 0.3;
const JSON_TEMPERATURE: f32 = 0.4;

/// Client for an OpenAI-compatible chat-completion API.
///
/// Use [`LlmClient::new`] for production or [`LlmClient::with_base_url`] to
/// point at a mock server in tests.
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl LlmClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`LlmError::ApiError`] if `base_url` is not a
    /// valid URL.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandnav/0.1 (brand-name-research)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| LlmError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        })
    }

    /// Requests a free-text completion.
    ///
    /// # Errors
    ///
    /// - [`LlmError::ApiError`] if the API returned a structured error body.
    /// - [`LlmError::Http`] on network failure or an unexplained non-2xx status.
    /// - [`LlmError::Deserialize`] if the response shape is unexpected.
    /// - [`LlmError::EmptyResponse`] if no completion came back.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.send_chat(system, user, TEXT_TEMPERATURE, None).await
    }

    /// Requests a completion in JSON-object mode.
    ///
    /// The returned string is the raw completion content; it is expected to
    /// be a JSON document but that is not verified here.
    ///
    /// # Errors
    ///
    /// Same as [`LlmClient::complete`].
    pub async fn complete_json(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.send_chat(
            system,
            user,
            JSON_TEMPERATURE,
            Some(ResponseFormat {
                kind: "json_object",
            }),
        )
        .await
    }

    async fn send_chat(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        response_format: Option<ResponseFormat<'_>>,
    ) -> Result<String, LlmError> {
        let url = self
            .base_url
            .join("chat/completions")
            .map_err(|e| LlmError::ApiError(format!("invalid endpoint path: {e}")))?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            response_format,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(&body) {
                return Err(LlmError::ApiError(envelope.error.message));
            }
            return Err(LlmError::ApiError(format!(
                "completion request failed with status {status}"
            )));
        }

        let body = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::Deserialize {
                context: "chat/completions".to_string(),
                source: e,
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_rejects_garbage() {
        let result = LlmClient::with_base_url("k", "gpt-4o", 30, "not a url");
        assert!(matches!(result, Err(LlmError::ApiError(_))));
    }
}
