//! The schema-conformant recipe produced by synthesis and optimization.

use serde::{Deserialize, Serialize};

/// A complete recipe.
///
/// Field names are the wire contract and stay the same regardless of the
/// language the values are written in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recipe {
    pub dish_name: String,
    pub description: String,
    pub cuisine_type: String,
    pub difficulty: String,
    pub prep_time_mins: u32,
    pub cook_time_mins: u32,
    pub servings: u32,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<InstructionStep>,
    #[serde(default)]
    pub tips: Vec<String>,
    pub nutritional_info: NutritionalInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct InstructionStep {
    pub step: u32,
    pub description: String,
}

/// Per-serving nutrition estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NutritionalInfo {
    pub calories_kcal: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl Recipe {
    /// Check the invariants serde cannot express.
    ///
    /// Returns a human-readable reason for the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.dish_name.trim().is_empty() {
            return Err("dish_name is empty".to_string());
        }
        if self.servings == 0 {
            return Err("servings must be at least 1".to_string());
        }
        if self.ingredients.is_empty() {
            return Err("ingredients list is empty".to_string());
        }
        if let Some(bad) = self
            .ingredients
            .iter()
            .find(|i| !i.amount.is_finite() || i.amount < 0.0)
        {
            return Err(format!(
                "ingredient '{}' has invalid amount {}",
                bad.name, bad.amount
            ));
        }
        if self.instructions.is_empty() {
            return Err("instructions list is empty".to_string());
        }
        for (index, step) in self.instructions.iter().enumerate() {
            let expected = index as u32 + 1;
            if step.step != expected {
                return Err(format!(
                    "instruction {} is numbered {}, expected {}",
                    index, step.step, expected
                ));
            }
        }
        Ok(())
    }

    /// Comma-separated "name (amount unit)" list used in prompts.
    pub fn ingredient_summary(&self) -> String {
        self.ingredients
            .iter()
            .map(|i| {
                let unit = i.unit.trim();
                if unit.is_empty() {
                    format!("{} ({})", i.name, format_amount(i.amount))
                } else {
                    format!("{} ({} {})", i.name, format_amount(i.amount), unit)
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One "N. description" line per step.
    pub fn numbered_steps(&self) -> String {
        self.instructions
            .iter()
            .map(|s| format!("{}. {}", s.step, s.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render whole amounts without a trailing ".0".
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_recipe() -> Recipe {
        Recipe {
            dish_name: "Pan-Seared Beef with Potatoes".to_string(),
            description: "Tender beef strips with crispy potatoes and sweet onion.".to_string(),
            cuisine_type: "Western".to_string(),
            difficulty: "medium".to_string(),
            prep_time_mins: 10,
            cook_time_mins: 20,
            servings: 2,
            ingredients: vec![
                RecipeIngredient {
                    name: "beef sirloin".to_string(),
                    amount: 300.0,
                    unit: "g".to_string(),
                },
                RecipeIngredient {
                    name: "onion".to_string(),
                    amount: 1.0,
                    unit: "whole".to_string(),
                },
                RecipeIngredient {
                    name: "potato".to_string(),
                    amount: 2.5,
                    unit: "whole".to_string(),
                },
            ],
            instructions: vec![
                InstructionStep {
                    step: 1,
                    description: "Slice the beef and season with salt and pepper.".to_string(),
                },
                InstructionStep {
                    step: 2,
                    description: "Pan-fry the diced potatoes until golden.".to_string(),
                },
                InstructionStep {
                    step: 3,
                    description: "Sear the beef with the onion and combine.".to_string(),
                },
            ],
            tips: vec!["Rest the beef for two minutes before slicing.".to_string()],
            nutritional_info: NutritionalInfo {
                calories_kcal: 520,
                protein_g: 35,
                carbs_g: 40,
                fat_g: 22,
            },
        }
    }

    #[test]
    fn test_round_trip() {
        let recipe = sample_recipe();
        let json = serde_json::to_string(&recipe).unwrap();
        let parsed: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, recipe);
    }

    #[test]
    fn test_valid_recipe_passes() {
        assert_eq!(sample_recipe().validate(), Ok(()));
    }

    #[test]
    fn test_step_numbering_must_start_at_one_and_increase() {
        let mut recipe = sample_recipe();
        recipe.instructions[1].step = 3;
        assert!(recipe.validate().unwrap_err().contains("expected 2"));

        let mut recipe = sample_recipe();
        for step in &mut recipe.instructions {
            step.step -= 1;
        }
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_empty_ingredients_rejected() {
        let mut recipe = sample_recipe();
        recipe.ingredients.clear();
        assert_eq!(
            recipe.validate(),
            Err("ingredients list is empty".to_string())
        );
    }

    #[test]
    fn test_numeric_fields_reject_text() {
        let mut value = serde_json::to_value(sample_recipe()).unwrap();
        value["prep_time_mins"] = serde_json::json!("15 minutes");
        assert!(serde_json::from_value::<Recipe>(value).is_err());

        let mut value = serde_json::to_value(sample_recipe()).unwrap();
        value["ingredients"][0]["amount"] = serde_json::json!("a pinch");
        assert!(serde_json::from_value::<Recipe>(value).is_err());
    }

    #[test]
    fn test_missing_tips_defaults_to_empty() {
        let mut value = serde_json::to_value(sample_recipe()).unwrap();
        value.as_object_mut().unwrap().remove("tips");
        let recipe: Recipe = serde_json::from_value(value).unwrap();
        assert!(recipe.tips.is_empty());
    }

    #[test]
    fn test_prompt_summaries() {
        let recipe = sample_recipe();
        assert_eq!(
            recipe.ingredient_summary(),
            "beef sirloin (300 g), onion (1 whole), potato (2.5 whole)"
        );
        assert!(recipe
            .numbered_steps()
            .starts_with("1. Slice the beef and season with salt and pepper.\n2. "));
    }
}
