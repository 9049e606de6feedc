use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::responses::ResponsesClient;
use crate::{RateError, Result};

/// Exchanges one prompt for one piece of generated text.
///
/// Implementations perform exactly one remote request per call and never
/// retry; any failure is reported as [`RateError::Remote`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier sent with every request
    fn model(&self) -> &str;
}

/// Hosted providers speaking the OpenAI-compatible Responses API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
    OpenAi,
}

impl Provider {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "groq" => Some(Self::Groq),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }

    /// Base URL used when `llm.endpoint` is left empty
    pub fn default_endpoint(self) -> &'static str {
        // Note: no trailing slashes
        match self {
            Self::Groq => "https://api.groq.com/openai/v1",
            Self::OpenAi => "https://api.openai.com/v1",
        }
    }
}

/// Build a completion client from runtime settings.
pub fn build_client(settings: &Settings) -> Result<Box<dyn CompletionClient>> {
    let provider = Provider::parse(&settings.llm.provider).ok_or_else(|| {
        RateError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: groq, openai",
            settings.llm.provider
        ))
    })?;

    Ok(Box::new(ResponsesClient::from_settings(provider, settings)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();
        settings.llm.api_key = "key".to_string();

        let err = match build_client(&settings) {
            Ok(_) => panic!("expected client creation to fail"),
            Err(e) => e,
        };
        assert!(matches!(err, RateError::Config(_)));
        assert!(err.to_string().contains("Unsupported llm.provider"));
    }

    #[test]
    fn provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_client(&settings) {
            Ok(_) => panic!("expected client creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("API key is missing"));
    }

    #[test]
    fn builds_client_with_default_model() {
        let mut settings = Settings::default();
        settings.llm.api_key = "key".to_string();

        let client = build_client(&settings).unwrap();
        assert_eq!(client.model(), "openai/gpt-oss-20b");
    }

    #[test]
    fn provider_names_are_case_insensitive() {
        assert_eq!(Provider::parse("GROQ"), Some(Provider::Groq));
        assert_eq!(Provider::parse(" openai "), Some(Provider::OpenAi));
        assert_eq!(Provider::parse("gemini"), None);
    }
}
