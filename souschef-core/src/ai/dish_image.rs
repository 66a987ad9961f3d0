//! Dish photo generation for finished recipes.

use std::sync::Mutex;

use async_openai::{
    config::OpenAIConfig,
    types::{CreateImageRequestArgs, Image, ImageModel, ImageResponseFormat, ImageSize},
    Client,
};
use async_trait::async_trait;
use thiserror::Error;

use super::config::AiConfig;
use super::prompts::render_dish_image_prompt;
use crate::recipe::Recipe;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Image API error: {0}")]
    Api(String),

    #[error("Image backend returned no image")]
    NoImage,
}

/// Trait for image-synthesis backends.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Render one image for `prompt` and return its URL.
    async fn generate(&self, prompt: &str) -> Result<String, ImageError>;
}

/// Image generator for OpenAI-compatible `/images/generations` endpoints.
pub struct OpenAiImageGenerator {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiImageGenerator {
    pub fn new(config: &AiConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.api_key)
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            model: config.image_model.clone(),
        }
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ImageError> {
        let request = CreateImageRequestArgs::default()
            .prompt(prompt)
            .model(ImageModel::Other(self.model.clone()))
            .n(1)
            .size(ImageSize::S1024x1024)
            .response_format(ImageResponseFormat::Url)
            .build()
            .map_err(|e| ImageError::Api(e.to_string()))?;

        tracing::debug!(model = %self.model, "Calling image API");

        let response = self
            .client
            .images()
            .create(request)
            .await
            .map_err(|e| ImageError::Api(e.to_string()))?;

        response
            .data
            .iter()
            .find_map(|image| match image.as_ref() {
                Image::Url { url, .. } => Some(url.clone()),
                _ => None,
            })
            .ok_or(ImageError::NoImage)
    }
}

/// Fake image generator for tests: a fixed URL or a fixed failure.
#[derive(Debug)]
pub struct FakeImageGenerator {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeImageGenerator {
    pub fn with_url(url: &str) -> Self {
        Self {
            reply: Ok(url.to_string()),
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(vec![]),
        }
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for FakeImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ImageError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(ImageError::Api)
    }
}

/// Generate a photo of the finished dish.
///
/// Returns `None` on any failure; a missing picture never fails the caller.
pub async fn generate_recipe_image(
    generator: &dyn ImageGenerator,
    recipe: &Recipe,
) -> Option<String> {
    let prompt = render_dish_image_prompt(recipe);

    match generator.generate(&prompt).await {
        Ok(url) => {
            tracing::info!(dish_name = %recipe.dish_name, "Dish image generated");
            Some(url)
        }
        Err(e) => {
            tracing::warn!(dish_name = %recipe.dish_name, error = %e, "Dish image generation failed");
            None
        }
    }
}
