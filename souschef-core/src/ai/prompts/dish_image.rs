//! Prompt for the image-synthesis backend, composed from a finished recipe.

use crate::recipe::Recipe;

/// Plating and lighting style chosen from the cuisine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatingStyle {
    Chinese,
    Western,
    Generic,
}

impl PlatingStyle {
    pub fn for_cuisine(cuisine: &str) -> Self {
        let cuisine = cuisine.to_lowercase();
        if cuisine.contains("chinese") || cuisine.contains('中') {
            PlatingStyle::Chinese
        } else if ["western", "french", "italian", "american", "european"]
            .iter()
            .any(|w| cuisine.contains(w))
            || cuisine.contains('西')
        {
            PlatingStyle::Western
        } else {
            PlatingStyle::Generic
        }
    }

    fn description(self) -> &'static str {
        match self {
            PlatingStyle::Chinese => {
                "Chinese home-style presentation, warm lighting, served on a fine blue-and-white \
                 porcelain plate on a dark wooden table"
            }
            PlatingStyle::Western => {
                "modern minimalist Western plating, shallow depth of field, clean large white \
                 plate, soft natural side light"
            }
            PlatingStyle::Generic => {
                "professional food photography, shallow depth of field, minimal background, \
                 focus on the food itself"
            }
        }
    }
}

/// Things the picture must not contain.
pub const EXCLUDED_ELEMENTS: &str =
    "No text, watermarks, logos, chopsticks, forks, spoons, faces or hands.";

pub fn render_dish_image_prompt(recipe: &Recipe) -> String {
    let style = PlatingStyle::for_cuisine(&recipe.cuisine_type);
    format!(
        "Close-up shot of '{name}', {description} {style}. Emphasize the texture and sheen of \
         the dish, clean bright background, appetizing, photorealistic, cinematic lighting, rich \
         detail, high definition. {excluded}",
        name = recipe.dish_name,
        description = recipe.description.trim(),
        style = style.description(),
        excluded = EXCLUDED_ELEMENTS,
    )
}
