//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::llm::responses::DEFAULT_MODEL;
use crate::reviews::DEFAULT_CHUNK_SIZE;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Review table settings
    #[serde(default)]
    pub input: InputSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Summarization settings
    #[serde(default)]
    pub summary: SummarySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// Path of the review table (CSV with Person_Name, Review_Text, Rating)
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (groq, openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// Per-request timeout in seconds (0 = wait forever)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Number of reviews summarized per completion call
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

// Default value functions

fn default_input_path() -> PathBuf {
    PathBuf::from("reviews.csv")
}

fn default_llm_provider() -> String {
    "groq".to_string()
}

fn default_llm_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file, `.env` and the environment
    pub fn load() -> Result<Self> {
        load_dotenv()?;

        let config_path = Self::config_path()?;
        let mut settings = Self::load_from(&config_path)?;
        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Load settings from a specific file, falling back to defaults if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "lecturer-rate", "lecturer-rate")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Copy of the settings that is safe to print
    pub fn redacted(&self) -> Self {
        let mut settings = self.clone();
        if !settings.llm.api_key.is_empty() {
            settings.llm.api_key = "********".to_string();
        }
        settings
    }
}

/// Load `.env` from the working directory without overriding variables already set.
fn load_dotenv() -> Result<()> {
    let path = Path::new(".env");
    if path.exists() {
        dotenvy::from_path(path).context("Failed to load .env file")?;
        tracing::debug!("Loaded environment from .env");
    }
    Ok(())
}
