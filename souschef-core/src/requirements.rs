//! Structured cooking requirements and the validator/defaulter that produces them.
//!
//! The backend's extraction output is decoded into [`RawRequirements`], where every
//! field is optional, and then turned into [`Requirements`] by
//! [`validate_requirements`]. Only the latter is handed to recipe synthesis.

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// Cuisine used when the request does not name one.
pub const DEFAULT_CUISINE: &str = "home-style";

/// Difficulty used when the request does not name one.
pub const DEFAULT_DIFFICULTY: &str = "medium";

/// Servings used when the request does not name a count.
pub const DEFAULT_SERVING_SIZE: u32 = 2;

/// Validated requirements for a single recipe request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Requirements {
    /// Never empty after validation.
    pub ingredients: Vec<String>,
    pub max_cook_time_mins: Option<u32>,
    pub dietary_requirements: Vec<String>,
    pub cuisine_preference: String,
    pub difficulty_preference: String,
    pub calorie_preference: Option<String>,
    pub serving_size: u32,
}

/// Requirements exactly as the backend reported them.
///
/// Numbers are signed so that a zero or negative value reaches the validator
/// instead of failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequirements {
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub max_cook_time_mins: Option<i64>,
    #[serde(default)]
    pub dietary_requirements: Option<Vec<String>>,
    #[serde(default)]
    pub cuisine_preference: Option<String>,
    #[serde(default)]
    pub difficulty_preference: Option<String>,
    #[serde(default)]
    pub calorie_preference: Option<String>,
    #[serde(default)]
    pub serving_size: Option<i64>,
}

/// Fill defaults and enforce the non-empty-ingredients invariant.
///
/// Never invents ingredients: blank entries are dropped, everything else is kept
/// in order with its original casing (duplicates included).
pub fn validate_requirements(raw: RawRequirements) -> Result<Requirements, RecipeError> {
    let ingredients: Vec<String> = raw
        .ingredients
        .unwrap_or_default()
        .into_iter()
        .filter(|i| !i.trim().is_empty())
        .collect();

    if ingredients.is_empty() {
        return Err(RecipeError::Validation(
            "no ingredients could be recognized in the description".to_string(),
        ));
    }

    let dietary_requirements = raw
        .dietary_requirements
        .unwrap_or_default()
        .into_iter()
        .filter(|d| !d.trim().is_empty())
        .collect();

    Ok(Requirements {
        ingredients,
        max_cook_time_mins: raw.max_cook_time_mins.and_then(positive_u32),
        dietary_requirements,
        cuisine_preference: non_blank(raw.cuisine_preference)
            .unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
        difficulty_preference: non_blank(raw.difficulty_preference)
            .unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
        calorie_preference: non_blank(raw.calorie_preference),
        serving_size: raw
            .serving_size
            .and_then(positive_u32)
            .unwrap_or(DEFAULT_SERVING_SIZE),
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn positive_u32(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beef_onion_potato() -> RawRequirements {
        serde_json::from_str(
            r#"{
                "ingredients": ["beef", "onion", "potato"],
                "max_cook_time_mins": 30,
                "cuisine_preference": "Western",
                "serving_size": 2,
                "dietary_requirements": [],
                "difficulty_preference": null,
                "calorie_preference": null
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_fills_difficulty_and_keeps_everything_else() {
        let validated = validate_requirements(beef_onion_potato()).unwrap();

        assert_eq!(
            validated,
            Requirements {
                ingredients: vec!["beef".into(), "onion".into(), "potato".into()],
                max_cook_time_mins: Some(30),
                dietary_requirements: vec![],
                cuisine_preference: "Western".into(),
                difficulty_preference: "medium".into(),
                calorie_preference: None,
                serving_size: 2,
            }
        );
    }

    #[test]
    fn test_defaults_for_absent_fields() {
        let raw: RawRequirements = serde_json::from_str(r#"{"ingredients": ["tofu"]}"#).unwrap();
        let validated = validate_requirements(raw).unwrap();

        assert_eq!(validated.cuisine_preference, DEFAULT_CUISINE);
        assert_eq!(validated.difficulty_preference, DEFAULT_DIFFICULTY);
        assert_eq!(validated.serving_size, DEFAULT_SERVING_SIZE);
        assert_eq!(validated.max_cook_time_mins, None);
        assert!(validated.dietary_requirements.is_empty());
    }

    #[test]
    fn test_empty_ingredients_is_validation_error() {
        let raw: RawRequirements =
            serde_json::from_str(r#"{"ingredients": [], "cuisine_preference": "Thai"}"#).unwrap();
        assert!(matches!(
            validate_requirements(raw),
            Err(RecipeError::Validation(_))
        ));

        assert!(matches!(
            validate_requirements(RawRequirements::default()),
            Err(RecipeError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_ingredients_dropped_but_duplicates_kept() {
        let raw = RawRequirements {
            ingredients: Some(vec![
                "Egg".into(),
                "  ".into(),
                "egg".into(),
                "Egg".into(),
            ]),
            ..Default::default()
        };
        let validated = validate_requirements(raw).unwrap();
        assert_eq!(validated.ingredients, vec!["Egg", "egg", "Egg"]);

        let only_blank = RawRequirements {
            ingredients: Some(vec!["".into(), "   ".into()]),
            ..Default::default()
        };
        assert!(validate_requirements(only_blank).is_err());
    }

    #[test]
    fn test_non_positive_numbers_are_treated_as_absent() {
        let raw = RawRequirements {
            ingredients: Some(vec!["rice".into()]),
            max_cook_time_mins: Some(0),
            serving_size: Some(-3),
            ..Default::default()
        };
        let validated = validate_requirements(raw).unwrap();
        assert_eq!(validated.max_cook_time_mins, None);
        assert_eq!(validated.serving_size, 2);
    }

    #[test]
    fn test_blank_strings_fall_back_to_defaults() {
        let raw = RawRequirements {
            ingredients: Some(vec!["leek".into()]),
            cuisine_preference: Some(" ".into()),
            difficulty_preference: Some("".into()),
            calorie_preference: Some("  ".into()),
            dietary_requirements: Some(vec!["".into(), "low salt".into()]),
            ..Default::default()
        };
        let validated = validate_requirements(raw).unwrap();
        assert_eq!(validated.cuisine_preference, DEFAULT_CUISINE);
        assert_eq!(validated.difficulty_preference, DEFAULT_DIFFICULTY);
        assert_eq!(validated.calorie_preference, None);
        assert_eq!(validated.dietary_requirements, vec!["low salt"]);
    }
}
