//! Generative backend integration for recipe work.
//!
//! This module provides:
//! - `AiClient` trait for abstracting chat backends, with `OpenAiClient` for
//!   OpenAI-compatible endpoints and `FakeAiClient` for tests
//! - `ImageGenerator` trait for dish photos
//! - the pipeline stages built on top of them: requirements extraction,
//!   recipe synthesis, intent classification, refinement and ingredient
//!   recognition
//! - prompt templates for each stage
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENAI_API_KEY` (required): API key
//! - `SOUSCHEF_AI_MODEL` (optional): Chat model, e.g. "gpt-4o-mini"
//! - `SOUSCHEF_AI_BASE_URL` (optional): API base URL
//! - `SOUSCHEF_IMAGE_MODEL` (optional): Image model, e.g. "dall-e-3"
//! - `SOUSCHEF_LOCALE` (optional): Locale for generated text
//!
//! # Example
//!
//! ```ignore
//! use souschef_core::ai::{extract_requirements, synthesize_recipe, OpenAiClient};
//!
//! let client = OpenAiClient::from_env()?;
//! let requirements = extract_requirements(&client, "beef, onion, 30 minutes", None).await?;
//! let recipe = synthesize_recipe(&client, &requirements, None).await?;
//! println!("{}", recipe.dish_name);
//! ```

mod client;
mod config;
mod dish_image;
mod extract;
mod fake;
mod intent;
mod optimize;
pub mod prompts;
mod synthesize;
mod types;
mod vision;

pub use client::{AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_MODEL};
pub use dish_image::{
    generate_recipe_image, FakeImageGenerator, ImageError, ImageGenerator, OpenAiImageGenerator,
};
pub use extract::extract_requirements;
pub use fake::FakeAiClient;
pub use intent::classify_intent;
pub use optimize::optimize_recipe;
pub use synthesize::synthesize_recipe;
pub use types::{ChatMessage, ChatRequest, ChatResponse, ImageData, Role, Usage};
pub use vision::{analyze_ingredients, IngredientAnalysis};
