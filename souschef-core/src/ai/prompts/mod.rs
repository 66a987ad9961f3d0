//! AI prompt templates.
//!
//! Every template is a pure function of its inputs: the same input always
//! renders a byte-identical prompt. Structured-output prompts restate the
//! literal keys of the expected shape, state the locale rule and forbid any
//! text outside the JSON object.

pub mod dish_image;
pub mod intent;
pub mod optimize;
pub mod requirements;
pub mod synthesis;
pub mod vision;

pub use dish_image::render_dish_image_prompt;
pub use intent::render_intent_system_prompt;
pub use optimize::render_optimize_prompt;
pub use requirements::render_requirements_prompt;
pub use synthesis::render_synthesis_prompt;
pub use vision::render_vision_prompt;

/// Appended to every structured-output prompt.
pub const JSON_ONLY_RULE: &str = "Return ONLY one JSON object with exactly the keys shown above. \
Do not wrap it in markdown, do not add comments, and do not write anything before or after it.";

/// The locale rule: keys are fixed, values follow the locale.
pub fn locale_rule(locale: Option<&str>) -> String {
    let language = match locale {
        Some(locale) => format!("in the locale \"{}\"", locale),
        None => "in the same language as the user's request".to_string(),
    };
    format!(
        "JSON keys are fixed lowercase snake_case identifiers and must be written exactly as shown. \
         Every natural-language value (names, descriptions, steps, tips, messages) must be written {}.",
        language
    )
}

/// The full recipe shape, with the fields that must carry over pre-filled.
pub fn recipe_shape(cuisine_type: &str, difficulty: &str, servings: u32) -> String {
    format!(
        r#"{{
  "dish_name": "name of the dish",
  "description": "two or three sentences describing the dish",
  "cuisine_type": "{cuisine_type}",
  "difficulty": "{difficulty}",
  "prep_time_mins": 15,
  "cook_time_mins": 20,
  "servings": {servings},
  "ingredients": [
    {{"name": "ingredient name", "amount": 2, "unit": "unit such as g, ml, tbsp or piece"}}
  ],
  "instructions": [
    {{"step": 1, "description": "detailed description of the step"}}
  ],
  "tips": ["a practical cooking tip"],
  "nutritional_info": {{
    "calories_kcal": 350,
    "protein_g": 30,
    "carbs_g": 25,
    "fat_g": 15
  }}
}}

Field rules:
- prep_time_mins, cook_time_mins, servings: integers
- amount: a number (integer or decimal), never text
- instructions: numbered consecutively starting at 1
- nutritional_info values: integers, estimated per serving"#,
        cuisine_type = cuisine_type,
        difficulty = difficulty,
        servings = servings
    )
}
