//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default OpenAI-compatible base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat and vision model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default image-synthesis model.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the backend.
    pub api_key: String,
    /// Chat/vision model name (e.g., "gpt-4o-mini").
    pub model: String,
    /// Image model name (e.g., "dall-e-3").
    pub image_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Language for natural-language values. `None` follows the request.
    pub locale: Option<String>,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: API key
    ///
    /// Optional:
    /// - `SOUSCHEF_AI_MODEL`: Model name (default: "gpt-4o-mini")
    /// - `SOUSCHEF_AI_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    /// - `SOUSCHEF_IMAGE_MODEL`: Image model (default: "dall-e-3")
    /// - `SOUSCHEF_LOCALE`: Locale for generated text, e.g. "zh-CN" (default: follow the request)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model = env::var("SOUSCHEF_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let image_model =
            env::var("SOUSCHEF_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());

        let base_url =
            env::var("SOUSCHEF_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let locale = env::var("SOUSCHEF_LOCALE")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_key,
            model,
            image_model,
            base_url,
            locale,
        })
    }

    /// Configuration with defaults for everything but the key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: None,
        }
    }
}
