use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Settings;
use crate::llm::client::{CompletionClient, Provider};
use crate::{RateError, Result};

pub const DEFAULT_MODEL: &str = "openai/gpt-oss-20b";

/// Client for the OpenAI-compatible `/responses` endpoint.
pub struct ResponsesClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl ResponsesClient {
    pub fn from_settings(provider: Provider, settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(RateError::Config(
                "API key is missing. Set llm.api_key in config or GROQ_API_KEY in the environment or .env file."
                    .to_string(),
            ));
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            provider.default_endpoint().to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let mut builder = Client::builder();
        if settings.llm.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.llm.timeout_secs));
        }
        let http = builder
            .build()
            .map_err(|e| RateError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            model,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_url(&self) -> String {
        format!("{}/responses", self.endpoint)
    }
}

#[async_trait]
impl CompletionClient for ResponsesClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ResponsesRequest {
            model: &self.model,
            input: prompt,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RateError::Remote(format!("Request to {} timed out", self.endpoint))
                } else {
                    RateError::Remote(format!("Request to {} failed: {e}", self.endpoint))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RateError::Remote(format!(
                "Completion endpoint returned {status}: {}",
                detail.trim()
            )));
        }

        let payload: ResponsesResponse = response
            .json()
            .await
            .map_err(|e| RateError::Remote(format!("Failed to parse completion response: {e}")))?;

        payload.into_output_text().ok_or_else(|| {
            RateError::Remote("Completion response did not contain any output text".to_string())
        })
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type", default)]
    kind: String,
    text: Option<String>,
}

impl ResponsesResponse {
    /// Join all assistant `output_text` parts, preferring the top-level field when present.
    fn into_output_text(self) -> Option<String> {
        if let Some(text) = self.output_text.as_deref().map(str::trim) {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }

        let joined: String = self
            .output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect();

        let joined = joined.trim();
        if joined.is_empty() {
            None
        } else {
            Some(joined.to_string())
        }
    }
}
