//! Recipe refinement: gate with the intent classifier, then refine or deflect.

use serde::Deserialize;

use crate::ai::intent::classify_intent;
use crate::ai::prompts::optimize::{
    render_optimize_prompt, OPTIMIZE_PROMPT_NAME, OPTIMIZE_SYSTEM_PROMPT,
};
use crate::ai::synthesize::parse_recipe;
use crate::ai::{AiClient, ChatMessage, ChatRequest};
use crate::error::{FormatError, RecipeError};
use crate::types::{OffTopicReminder, OptimizationRequest, OptimizeOutcome};

/// Discriminant fields of a reminder reply. `type: off_topic_reminder` is the
/// older spelling and still accepted.
#[derive(Debug, Deserialize)]
struct ReminderProbe {
    #[serde(default)]
    kind: Option<String>,
    #[serde(default, rename = "type")]
    legacy_type: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ReminderProbe {
    fn is_reminder(&self) -> bool {
        self.kind.as_deref() == Some("off_topic")
            || self.legacy_type.as_deref() == Some("off_topic_reminder")
    }
}

/// Decode a refinement reply into one of the two terminal variants.
fn parse_optimize_reply(content: &str, dish_name: &str) -> Result<OptimizeOutcome, FormatError> {
    let probe: ReminderProbe = serde_json::from_str(content)
        .map_err(|e| FormatError::Optimize(format!("reply is not a JSON object: {}", e)))?;

    if probe.is_reminder() {
        let message = probe
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| FormatError::Optimize("off-topic reminder has no message".to_string()))?;
        return Ok(OptimizeOutcome::OffTopic(OffTopicReminder::with_message(
            message, dish_name,
        )));
    }

    parse_recipe(content)
        .map(OptimizeOutcome::Recipe)
        .map_err(FormatError::Optimize)
}

/// Refine `request.current_recipe` according to `request.user_request`.
///
/// The current recipe is only read. Off-topic instructions produce an
/// [`OffTopicReminder`]; a reply that is neither shape fails with
/// [`FormatError::Optimize`].
pub async fn optimize_recipe(
    ai_client: &dyn AiClient,
    request: &OptimizationRequest,
    locale: Option<&str>,
) -> Result<OptimizeOutcome, RecipeError> {
    let user_request = request.user_request.trim();
    if user_request.is_empty() {
        return Err(RecipeError::EmptyInput);
    }

    let dish_name = request.current_recipe.dish_name.as_str();

    if !classify_intent(ai_client, user_request, Some(dish_name)).await {
        tracing::info!(dish_name = %dish_name, "Optimization request deflected as off-topic");
        return Ok(OptimizeOutcome::OffTopic(OffTopicReminder::for_dish(
            dish_name,
        )));
    }

    let chat_request = ChatRequest {
        messages: vec![
            ChatMessage::system(OPTIMIZE_SYSTEM_PROMPT),
            ChatMessage::user(render_optimize_prompt(
                &request.current_recipe,
                user_request,
                &request.conversation_history,
                locale,
            )),
        ],
        json_response: true,
        max_tokens: Some(1500),
        temperature: Some(0.8),
    };

    let response = ai_client.complete(OPTIMIZE_PROMPT_NAME, chat_request).await?;
    let outcome = parse_optimize_reply(&response.content, dish_name)?;

    match &outcome {
        OptimizeOutcome::Recipe(recipe) => tracing::info!(
            from = %dish_name,
            to = %recipe.dish_name,
            "Recipe refined"
        ),
        OptimizeOutcome::OffTopic(_) => tracing::info!(
            dish_name = %dish_name,
            "Backend deflected optimization request as off-topic"
        ),
    }

    Ok(outcome)
}
