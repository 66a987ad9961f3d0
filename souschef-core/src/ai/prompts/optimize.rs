//! Prompt for refining an existing recipe from a follow-up instruction.

use super::{locale_rule, recipe_shape, JSON_ONLY_RULE};
use crate::recipe::Recipe;
use crate::types::{ConversationRole, ConversationTurn};

/// Prompt name for logging and test routing.
pub const OPTIMIZE_PROMPT_NAME: &str = "optimize_recipe";

/// Only this many of the most recent history entries are restated.
pub const MAX_HISTORY_TURNS: usize = 4;

/// Role given to the backend for refinement.
pub const OPTIMIZE_SYSTEM_PROMPT: &str = "You are an experienced recipe optimization expert \
and cooking consultant. You apply the user's requested change precisely while keeping the \
dish practical and true to its character, and you politely steer unrelated questions back to \
the recipe. You reply with JSON only.";

/// Render the conversation context block, or an empty string with no history.
pub fn render_history(history: &[ConversationTurn]) -> String {
    if history.is_empty() {
        return String::new();
    }
    let start = history.len().saturating_sub(MAX_HISTORY_TURNS);
    let lines = history[start..]
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                ConversationRole::Requester => "User",
                ConversationRole::Assistant => "Assistant",
            };
            format!("{}: {}", speaker, turn.content)
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Conversation so far:\n{}\n\n", lines)
}

/// Render the refinement prompt.
pub fn render_optimize_prompt(
    recipe: &Recipe,
    user_request: &str,
    history: &[ConversationTurn],
    locale: Option<&str>,
) -> String {
    let dish = &recipe.dish_name;

    format!(
        r#"Refine the following recipe according to the user's request.

Current recipe:
Dish name: {dish}
Cuisine: {cuisine}
Difficulty: {difficulty}
Servings: {servings}
Ingredients: {ingredients}
Steps:
{steps}

{history}User's request: "{user_request}"

First decide whether the request is about refining this recipe.

Recipe-related requests include: ingredient preparation (cutting, marinating, pre-treatment), cooking technique, flavor adjustments, nutrition, timing, difficulty, portion size, ingredient substitution or removal, and presentation.
Unrelated requests include: weather, news, politics, entertainment, personal life, work, study, software questions, and anything else not about refining this recipe.

If the request is unrelated, return exactly this JSON:
{{
  "kind": "off_topic",
  "message": "a short, polite reminder that you can only help refine \"{dish}\", with a few example changes the user could ask for; it must mention \"{dish}\""
}}

If the request is about the recipe:
1. Work out exactly what the user wants changed.
2. Make the change visible in the ingredients and the steps.
3. When the change concerns technique, describe the new technique in the steps.
4. Keep the overall style of the dish and keep it practical.
5. Adjust times, seasoning amounts and nutrition to match.
Return the complete refined recipe with these keys:
{shape}

Rules:
- {locale}
- {json_only}"#,
        dish = dish,
        cuisine = recipe.cuisine_type,
        difficulty = recipe.difficulty,
        servings = recipe.servings,
        ingredients = recipe.ingredient_summary(),
        steps = recipe.numbered_steps(),
        history = render_history(history),
        user_request = user_request,
        shape = recipe_shape(&recipe.cuisine_type, &recipe.difficulty, recipe.servings),
        locale = locale_rule(locale),
        json_only = JSON_ONLY_RULE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::tests::sample_recipe;

    #[test]
    fn test_restates_current_recipe() {
        let prompt = render_optimize_prompt(&sample_recipe(), "dice the beef", &[], None);
        assert!(prompt.contains("Dish name: Pan-Seared Beef with Potatoes"));
        assert!(prompt.contains("beef sirloin (300 g)"));
        assert!(prompt.contains("1. Slice the beef"));
        assert!(prompt.contains("User's request: \"dice the beef\""));
        assert!(prompt.contains(r#""kind": "off_topic""#));
        assert!(!prompt.contains("Conversation so far"));
    }

    #[test]
    fn test_history_limited_to_last_four() {
        let history: Vec<ConversationTurn> = (1..=6)
            .map(|i| {
                if i % 2 == 1 {
                    ConversationTurn::requester(format!("question {}", i))
                } else {
                    ConversationTurn::assistant(format!("answer {}", i))
                }
            })
            .collect();

        let block = render_history(&history);
        assert!(!block.contains("question 1"));
        assert!(!block.contains("answer 2"));
        assert_eq!(
            block,
            "Conversation so far:\nUser: question 3\nAssistant: answer 4\nUser: question 5\nAssistant: answer 6\n\n"
        );
    }

    #[test]
    fn test_prefilled_shape_matches_current_recipe() {
        let prompt = render_optimize_prompt(&sample_recipe(), "less oil", &[], None);
        assert!(prompt.contains(r#""cuisine_type": "Western""#));
        assert!(prompt.contains(r#""servings": 2"#));
        assert!(prompt.contains("nutritional_info"));
    }
}
