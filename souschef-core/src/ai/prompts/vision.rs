//! Prompt template for recognizing ingredients in a photo.

use super::locale_rule;

pub const VISION_PROMPT_NAME: &str = "analyze_ingredients";

/// There is no request text to take the language from, so English is the
/// fallback locale here.
pub fn render_vision_prompt(locale: Option<&str>) -> String {
    format!(
        r#"Carefully analyze the ingredients in this photo and return the result as JSON.

Requirements:
1. Identify every visible food ingredient.
2. Only identify ingredients; ignore tableware, containers and utensils.
3. If there are no ingredients in the photo, return an empty list.
4. Rate your confidence in the result as high, medium or low.

Return JSON with exactly this structure:
{{
  "ingredients": ["ingredient 1", "ingredient 2"],
  "confidence": "high",
  "description": "a short description of the ingredients in the photo"
}}

Example:
{{
  "ingredients": ["chicken", "broccoli", "carrot", "onion"],
  "confidence": "high",
  "description": "Raw chicken breast next to broccoli, carrots and an onion on a cutting board"
}}

{locale}
Return ONLY the JSON, no other text."#,
        locale = locale_rule(locale.or(Some("en"))),
    )
}
