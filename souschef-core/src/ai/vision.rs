//! Ingredient recognition from a photo using a vision model.

use serde::{Deserialize, Serialize};

use crate::ai::prompts::vision::{render_vision_prompt, VISION_PROMPT_NAME};
use crate::ai::{AiClient, ChatMessage, ChatRequest, ImageData};

/// Result of analyzing an ingredient photo. Never an error: backend failures
/// come back with `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct IngredientAnalysis {
    pub success: bool,
    pub ingredients: Vec<String>,
    /// One of "high", "medium", "low" or "unknown".
    pub confidence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IngredientAnalysis {
    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            ingredients: vec![],
            confidence: "unknown".to_string(),
            description: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct VisionReply {
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    confidence: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

fn normalize_confidence(value: Option<&str>) -> String {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some(level @ ("high" | "medium" | "low")) => level.to_string(),
        _ => "unknown".to_string(),
    }
}

/// Parse the reply as JSON, falling back to the outermost `{...}` span when
/// the model wrapped it in prose or a code fence.
fn parse_vision_reply(content: &str) -> Option<VisionReply> {
    if let Ok(reply) = serde_json::from_str(content) {
        return Some(reply);
    }
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&content[start..=end]).ok()
}

/// Identify the ingredients visible in `image`.
pub async fn analyze_ingredients(
    ai_client: &dyn AiClient,
    image: ImageData,
    locale: Option<&str>,
) -> IngredientAnalysis {
    let request = ChatRequest {
        messages: vec![ChatMessage::user_with_images(
            render_vision_prompt(locale),
            vec![image],
        )],
        json_response: false,
        max_tokens: Some(1000),
        temperature: Some(0.3),
    };

    let response = match ai_client.complete(VISION_PROMPT_NAME, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, "Ingredient analysis failed");
            return IngredientAnalysis::failed(e.to_string());
        }
    };

    let Some(reply) = parse_vision_reply(&response.content) else {
        tracing::warn!("Vision reply contained no JSON object");
        return IngredientAnalysis {
            success: true,
            ingredients: vec![],
            confidence: "unknown".to_string(),
            description: None,
            error: None,
        };
    };

    let ingredients: Vec<String> = reply
        .ingredients
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect();

    tracing::info!(count = ingredients.len(), "Ingredients recognized");

    IngredientAnalysis {
        success: true,
        ingredients,
        confidence: normalize_confidence(reply.confidence.as_deref()),
        description: reply.description.filter(|d| !d.trim().is_empty()),
        error: None,
    }
}
