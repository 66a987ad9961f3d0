//! Requirements extraction: free text to validated [`Requirements`].

use crate::ai::prompts::requirements::{
    render_requirements_prompt, REQUIREMENTS_PROMPT_NAME, REQUIREMENTS_SYSTEM_PROMPT,
};
use crate::ai::{AiClient, ChatMessage, ChatRequest};
use crate::error::{FormatError, RecipeError};
use crate::requirements::{validate_requirements, RawRequirements, Requirements};

/// Extract and validate requirements from a free-text cooking request.
///
/// Blank input fails with [`RecipeError::EmptyInput`] before the backend is
/// called. A reply that is not the declared JSON shape fails with
/// [`FormatError::Requirements`]; a reply without ingredients fails validation.
pub async fn extract_requirements(
    ai_client: &dyn AiClient,
    description: &str,
    locale: Option<&str>,
) -> Result<Requirements, RecipeError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(RecipeError::EmptyInput);
    }

    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(REQUIREMENTS_SYSTEM_PROMPT),
            ChatMessage::user(render_requirements_prompt(description, locale)),
        ],
        json_response: true,
        max_tokens: Some(800),
        temperature: Some(0.3),
    };

    let response = ai_client.complete(REQUIREMENTS_PROMPT_NAME, request).await?;

    let raw: RawRequirements =
        serde_json::from_str(&response.content).map_err(FormatError::Requirements)?;

    let requirements = validate_requirements(raw)?;

    tracing::info!(
        ingredients = requirements.ingredients.len(),
        cuisine = %requirements.cuisine_preference,
        difficulty = %requirements.difficulty_preference,
        max_cook_time_mins = ?requirements.max_cook_time_mins,
        serving_size = requirements.serving_size,
        "Requirements extracted"
    );

    Ok(requirements)
}
