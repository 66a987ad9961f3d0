//! Recipe synthesis: validated [`Requirements`] to a schema-conformant [`Recipe`].

use crate::ai::prompts::synthesis::{
    render_synthesis_prompt, SYNTHESIS_PROMPT_NAME, SYNTHESIS_SYSTEM_PROMPT,
};
use crate::ai::{AiClient, ChatMessage, ChatRequest};
use crate::error::{FormatError, RecipeError};
use crate::recipe::Recipe;
use crate::requirements::Requirements;

/// Decode and check a recipe reply.
///
/// Shared with refinement: a reply is only accepted if it decodes into a
/// [`Recipe`] and passes [`Recipe::validate`].
pub(crate) fn parse_recipe(content: &str) -> Result<Recipe, String> {
    let recipe: Recipe = serde_json::from_str(content).map_err(|e| e.to_string())?;
    recipe.validate()?;
    Ok(recipe)
}

/// Synthesize a recipe for the given requirements.
///
/// Malformed output fails immediately with [`FormatError::Synthesis`]; there is
/// no re-prompt.
pub async fn synthesize_recipe(
    ai_client: &dyn AiClient,
    requirements: &Requirements,
    locale: Option<&str>,
) -> Result<Recipe, RecipeError> {
    if requirements.ingredients.is_empty() {
        return Err(RecipeError::Validation(
            "cannot synthesize a recipe without ingredients".to_string(),
        ));
    }

    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(SYNTHESIS_SYSTEM_PROMPT),
            ChatMessage::user(render_synthesis_prompt(requirements, locale)),
        ],
        json_response: true,
        max_tokens: Some(1500),
        temperature: Some(0.7),
    };

    let response = ai_client.complete(SYNTHESIS_PROMPT_NAME, request).await?;

    let recipe = parse_recipe(&response.content).map_err(FormatError::Synthesis)?;

    tracing::info!(
        dish_name = %recipe.dish_name,
        steps = recipe.instructions.len(),
        ingredients = recipe.ingredients.len(),
        "Recipe synthesized"
    );

    Ok(recipe)
}
