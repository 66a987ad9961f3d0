//! Prompt for extracting structured requirements from a free-text request.

use super::{locale_rule, JSON_ONLY_RULE};

/// Prompt name for logging and test routing.
pub const REQUIREMENTS_PROMPT_NAME: &str = "extract_requirements";

/// Role given to the backend for extraction.
pub const REQUIREMENTS_SYSTEM_PROMPT: &str = "You are a recipe requirements analyst. \
You extract structured cooking requirements from a person's free-text description \
and reply with JSON in exactly the requested format.";

/// Time expressions and the `max_cook_time_mins` the backend must map them to.
///
/// This table is the whole normalization contract: the extractor does not
/// re-derive times itself.
pub const TIME_EXPRESSION_RULES: &[(&str, &str)] = &[
    ("\"half an hour\", \"half hour\"", "30"),
    ("\"an hour\", \"one hour\"", "60"),
    ("\"an hour and a half\", \"90 minutes\"", "90"),
    (
        "\"quick dish\", \"quick meal\", \"something fast\"",
        "30 (quick dishes take 15-30 minutes; use the upper bound)",
    ),
    (
        "\"under N minutes\", \"within N minutes\", \"N minutes or less\"",
        "N",
    ),
    ("\"N hours\"", "N * 60"),
    ("no time mentioned", "null"),
];

/// Render the extraction prompt for one description.
pub fn render_requirements_prompt(description: &str, locale: Option<&str>) -> String {
    let time_rules = TIME_EXPRESSION_RULES
        .iter()
        .map(|(expression, minutes)| format!("   - {} -> {}", expression, minutes))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze the following cooking request and extract structured requirements.

User description: "{description}"

Return JSON with these keys:
{{
  "ingredients": ["every ingredient named in the description"],
  "max_cook_time_mins": 30,
  "dietary_requirements": ["dietary restrictions, e.g. not spicy, vegetarian, low salt"],
  "cuisine_preference": "preferred cuisine, or null",
  "difficulty_preference": "preferred difficulty, or null",
  "calorie_preference": "calorie preference, e.g. low calorie or high protein, or null",
  "serving_size": 2
}}

Extraction rules:
1. List every ingredient mentioned, including vegetables, meat and seasonings, as written by the user.
2. Convert time expressions to max_cook_time_mins using this table:
{time_rules}
3. Collect dietary restrictions such as not spicy, vegetarian, low salt or sugar free.
4. Identify cuisine preferences such as Chinese, Western, Japanese or Korean.
5. Identify difficulty preferences such as easy, quick or elaborate.
6. Identify calorie preferences such as low calorie, high protein or weight loss.
7. If something is not mentioned, use null. If the number of servings is not mentioned, use 2.
8. {locale}
9. {json_only}"#,
        description = description,
        time_rules = time_rules,
        locale = locale_rule(locale),
        json_only = JSON_ONLY_RULE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_requirements_prompt("beef and onion, done in half an hour", None);

        assert!(prompt.contains("User description: \"beef and onion, done in half an hour\""));
        for key in [
            "ingredients",
            "max_cook_time_mins",
            "dietary_requirements",
            "cuisine_preference",
            "difficulty_preference",
            "calorie_preference",
            "serving_size",
        ] {
            assert!(prompt.contains(&format!("\"{}\"", key)), "missing {}", key);
        }
    }

    #[test]
    fn test_time_table_is_embedded() {
        let prompt = render_requirements_prompt("anything", None);
        assert!(prompt.contains("\"half an hour\", \"half hour\" -> 30"));
        assert!(prompt.contains("use the upper bound"));
        assert!(prompt.contains("no time mentioned -> null"));
    }

    #[test]
    fn test_deterministic() {
        let a = render_requirements_prompt("tofu for three", Some("en-GB"));
        let b = render_requirements_prompt("tofu for three", Some("en-GB"));
        assert_eq!(a, b);
        assert!(a.contains("\"en-GB\""));
    }
}
