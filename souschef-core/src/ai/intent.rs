//! Binary recipe-intent classification.
//!
//! Fails closed: anything other than an exact in-domain answer, including a
//! backend error, is treated as off-topic.

use crate::ai::prompts::intent::{
    render_intent_system_prompt, INTENT_PROMPT_NAME, IN_DOMAIN_TOKEN,
};
use crate::ai::{AiClient, ChatMessage, ChatRequest};

/// Decide whether `message` is a cooking request.
///
/// With `dish_name` the question is whether the message asks to refine that
/// dish. Never returns an error.
pub async fn classify_intent(
    ai_client: &dyn AiClient,
    message: &str,
    dish_name: Option<&str>,
) -> bool {
    if message.trim().is_empty() {
        return false;
    }

    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(render_intent_system_prompt(dish_name)),
            ChatMessage::user(message),
        ],
        json_response: false,
        max_tokens: Some(5),
        temperature: Some(0.0),
    };

    match ai_client.complete(INTENT_PROMPT_NAME, request).await {
        Ok(response) => {
            let in_domain = response.content.trim() == IN_DOMAIN_TOKEN;
            tracing::debug!(
                answer = %response.content.trim(),
                in_domain,
                "Intent classified"
            );
            in_domain
        }
        Err(e) => {
            tracing::warn!(error = %e, "Intent classification failed, treating as off-topic");
            false
        }
    }
}
