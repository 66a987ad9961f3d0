//! Prompt for synthesizing a recipe from validated requirements.

use super::{locale_rule, recipe_shape, JSON_ONLY_RULE};
use crate::requirements::Requirements;

/// Prompt name for logging and test routing.
pub const SYNTHESIS_PROMPT_NAME: &str = "synthesize_recipe";

/// Role given to the backend for synthesis.
pub const SYNTHESIS_SYSTEM_PROMPT: &str = "You are a creative, helpful professional chef and \
nutritionist who specializes in simple home cooking. You write delicious recipes with clear \
steps from the ingredients and constraints you are given, and you reply with JSON only.";

/// Literal line used when no constraint applies.
pub const NO_CONSTRAINTS: &str = "no special constraints";

/// One line per constraint that is present.
pub fn constraint_lines(requirements: &Requirements) -> Vec<String> {
    let mut constraints = Vec::new();
    if let Some(minutes) = requirements.max_cook_time_mins {
        constraints.push(format!(
            "Total cooking time must not exceed {} minutes",
            minutes
        ));
    }
    if !requirements.dietary_requirements.is_empty() {
        constraints.push(format!(
            "Dietary requirements: {}",
            requirements.dietary_requirements.join(", ")
        ));
    }
    if let Some(calories) = &requirements.calorie_preference {
        constraints.push(format!("Calorie preference: {}", calories));
    }
    constraints
}

/// Render the synthesis prompt for one set of requirements.
pub fn render_synthesis_prompt(requirements: &Requirements, locale: Option<&str>) -> String {
    let constraints = constraint_lines(requirements);
    let constraints_str = if constraints.is_empty() {
        NO_CONSTRAINTS.to_string()
    } else {
        constraints
            .iter()
            .map(|c| format!("- {}", c))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"Create a recipe from the following details.

Ingredients: {ingredients}
Cuisine: {cuisine}
Difficulty: {difficulty}
Servings: {servings}

Constraints:
{constraints}

Return JSON with exactly these keys:
{shape}

Rules:
- {locale}
- {json_only}"#,
        ingredients = requirements.ingredients.join(", "),
        cuisine = requirements.cuisine_preference,
        difficulty = requirements.difficulty_preference,
        servings = requirements.serving_size,
        constraints = constraints_str,
        shape = recipe_shape(
            &requirements.cuisine_preference,
            &requirements.difficulty_preference,
            requirements.serving_size
        ),
        locale = locale_rule(locale),
        json_only = JSON_ONLY_RULE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements() -> Requirements {
        Requirements {
            ingredients: vec!["beef".into(), "onion".into(), "potato".into()],
            max_cook_time_mins: None,
            dietary_requirements: vec![],
            cuisine_preference: "Western".into(),
            difficulty_preference: "medium".into(),
            calorie_preference: None,
            serving_size: 2,
        }
    }

    #[test]
    fn test_required_keys_always_present() {
        let mut with_constraints = requirements();
        with_constraints.max_cook_time_mins = Some(30);
        with_constraints.dietary_requirements = vec!["not spicy".into()];

        for req in [requirements(), with_constraints] {
            let prompt = render_synthesis_prompt(&req, None);
            for key in ["dish_name", "ingredients", "instructions", "nutritional_info"] {
                assert!(prompt.contains(key), "missing {}", key);
            }
        }
    }

    #[test]
    fn test_no_constraints_line() {
        let prompt = render_synthesis_prompt(&requirements(), None);
        assert!(prompt.contains("Constraints:\nno special constraints\n"));
        assert!(prompt.contains("Ingredients: beef, onion, potato"));
    }

    #[test]
    fn test_each_constraint_on_its_own_line() {
        let mut req = requirements();
        req.max_cook_time_mins = Some(30);
        req.dietary_requirements = vec!["not spicy".into(), "low salt".into()];
        req.calorie_preference = Some("low calorie".into());

        let prompt = render_synthesis_prompt(&req, None);
        assert!(prompt.contains(
            "- Total cooking time must not exceed 30 minutes\n\
             - Dietary requirements: not spicy, low salt\n\
             - Calorie preference: low calorie\n"
        ));
        assert!(!prompt.contains(NO_CONSTRAINTS));
    }

    #[test]
    fn test_snapshot_stable() {
        assert_eq!(
            render_synthesis_prompt(&requirements(), Some("fr-FR")),
            render_synthesis_prompt(&requirements(), Some("fr-FR"))
        );
    }
}
