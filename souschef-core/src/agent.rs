//! The recipe agent: one handle over every pipeline.
//!
//! Holds only read-only backend handles, so a single instance behind an `Arc`
//! serves any number of concurrent requests. Conversation state belongs to the
//! caller and arrives with each optimize call.

use std::sync::Arc;

use crate::ai::{
    self, AiClient, AiConfig, AiError, ImageGenerator, IngredientAnalysis, OpenAiClient,
    OpenAiImageGenerator,
};
use crate::error::RecipeError;
use crate::image::load_image;
use crate::recipe::Recipe;
use crate::types::{OptimizationRequest, OptimizeOutcome};

pub struct RecipeAgent {
    ai: Arc<dyn AiClient>,
    images: Arc<dyn ImageGenerator>,
    locale: Option<String>,
}

impl RecipeAgent {
    pub fn new(
        ai: Arc<dyn AiClient>,
        images: Arc<dyn ImageGenerator>,
        locale: Option<String>,
    ) -> Self {
        Self { ai, images, locale }
    }

    /// Build an agent on the OpenAI-compatible backends named by the environment.
    pub fn from_env() -> Result<Self, AiError> {
        let config = AiConfig::from_env()?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &AiConfig) -> Self {
        Self::new(
            Arc::new(OpenAiClient::new(config)),
            Arc::new(OpenAiImageGenerator::new(config)),
            config.locale.clone(),
        )
    }

    pub fn model_name(&self) -> &str {
        self.ai.model_name()
    }

    fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Free text to a complete recipe: extract, validate, then synthesize.
    pub async fn generate_recipe(&self, description: &str) -> Result<Recipe, RecipeError> {
        let requirements =
            ai::extract_requirements(self.ai.as_ref(), description, self.locale()).await?;
        ai::synthesize_recipe(self.ai.as_ref(), &requirements, self.locale()).await
    }

    pub async fn optimize_recipe(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizeOutcome, RecipeError> {
        ai::optimize_recipe(self.ai.as_ref(), request, self.locale()).await
    }

    pub async fn classify_intent(&self, message: &str) -> bool {
        ai::classify_intent(self.ai.as_ref(), message, None).await
    }

    pub async fn generate_image(&self, recipe: &Recipe) -> Option<String> {
        ai::generate_recipe_image(self.images.as_ref(), recipe).await
    }

    /// Recognize ingredients in a photo.
    ///
    /// Only an unreadable or unsupported image is an `Err`; backend trouble is
    /// reported inside the analysis.
    pub async fn analyze_ingredients(&self, data: Vec<u8>) -> Result<IngredientAnalysis, String> {
        let image = load_image(data)?;
        Ok(ai::analyze_ingredients(self.ai.as_ref(), image, self.locale()).await)
    }
}
