//! AI client implementation using an OpenAI-compatible API.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrlArgs, ResponseFormat,
    },
    Client,
};
use async_trait::async_trait;
use thiserror::Error;

use super::config::AiConfig;
use super::types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};

#[derive(Error, Debug)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Backend returned no content")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

/// Trait for AI clients.
///
/// Implementations hold no per-request state; one handle is shared by all
/// concurrent requests.
#[async_trait]
pub trait AiClient: Send + Sync {
    /// Complete a chat request and return the model's raw text.
    ///
    /// The `prompt_name` identifies the task for logging and test routing.
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError>;

    /// Model name used by this client (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// AI client for OpenAI and OpenAI-compatible endpoints.
///
/// No caching and no retries: every call is a single round trip.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    /// Create a new client from environment configuration.
    pub fn from_env() -> Result<Self, AiError> {
        let config = AiConfig::from_env()?;
        Ok(Self::new(&config))
    }

    /// Create a new client with the given configuration.
    pub fn new(config: &AiConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
        }
    }

    /// Convert our ChatMessage to async-openai's format.
    fn to_openai_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage, AiError> {
        match msg.role {
            Role::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| build_error("system message", e)),
            Role::User if msg.images.is_empty() => ChatCompletionRequestUserMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| build_error("user message", e)),
            Role::User => {
                let mut parts: Vec<ChatCompletionRequestUserMessageContentPart> =
                    vec![ChatCompletionRequestMessageContentPartTextArgs::default()
                        .text(msg.content.clone())
                        .build()
                        .map_err(|e| build_error("text part", e))?
                        .into()];

                for image in &msg.images {
                    let image_url = ImageUrlArgs::default()
                        .url(image.to_data_url())
                        .detail(ImageDetail::Auto)
                        .build()
                        .map_err(|e| build_error("image url", e))?;
                    parts.push(
                        ChatCompletionRequestMessageContentPartImageArgs::default()
                            .image_url(image_url)
                            .build()
                            .map_err(|e| build_error("image part", e))?
                            .into(),
                    );
                }

                ChatCompletionRequestUserMessageArgs::default()
                    .content(parts)
                    .build()
                    .map(Into::into)
                    .map_err(|e| build_error("user message", e))
            }
            Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                .content(msg.content.clone())
                .build()
                .map(Into::into)
                .map_err(|e| build_error("assistant message", e)),
        }
    }
}

fn build_error(what: &str, e: OpenAIError) -> AiError {
    AiError::Api(format!("Failed to build {}: {}", what, e))
}

#[async_trait]
impl AiClient for OpenAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let messages: Vec<ChatCompletionRequestMessage> = request
            .messages
            .iter()
            .map(Self::to_openai_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut req_builder = CreateChatCompletionRequestArgs::default();
        req_builder.model(&self.model).messages(messages);

        if let Some(max_tokens) = request.max_tokens {
            req_builder.max_completion_tokens(max_tokens);
        }

        if let Some(temperature) = request.temperature {
            req_builder.temperature(temperature);
        }

        if request.json_response {
            req_builder.response_format(ResponseFormat::JsonObject);
        }

        let openai_request = req_builder
            .build()
            .map_err(|e| AiError::Api(e.to_string()))?;

        tracing::debug!(
            prompt_name = prompt_name,
            model = %self.model,
            "Calling AI API"
        );

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(|e| AiError::Api(e.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(AiError::EmptyResponse)?;

        let usage = response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        tracing::debug!(
            prompt_name = prompt_name,
            total_tokens = usage.total_tokens,
            "AI API call completed"
        );

        Ok(ChatResponse { content, usage })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ImageData;

    #[test]
    fn test_text_messages_convert() {
        for msg in [
            ChatMessage::system("rules"),
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi"),
        ] {
            assert!(OpenAiClient::to_openai_message(&msg).is_ok());
        }
    }

    #[test]
    fn test_image_message_becomes_multipart() {
        let msg = ChatMessage::user_with_images(
            "what is in this picture?",
            vec![ImageData {
                data: vec![1, 2, 3],
                content_type: "image/png".to_string(),
            }],
        );
        let converted = OpenAiClient::to_openai_message(&msg).unwrap();
        let json = serde_json::to_value(&converted).unwrap();
        let parts = json["content"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[1]["type"], "image_url");
        assert!(parts[1]["image_url"]["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,"));
    }
}
