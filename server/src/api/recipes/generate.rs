use crate::api::{recipe_error_response, ErrorResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use souschef_core::Recipe;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    /// Free-text description of ingredients and preferences.
    pub description: String,
}

/// Generate a recipe from a free-text description
#[utoipa::path(
    post,
    path = "/api/v1/recipes/generate",
    tag = "recipes",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe", body = Recipe),
        (status = 400, description = "Empty description or no ingredients recognized", body = ErrorResponse),
        (status = 500, description = "Backend returned an unusable recipe", body = ErrorResponse),
        (status = 503, description = "Backend unavailable", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> impl IntoResponse {
    match state.agent.generate_recipe(&request.description).await {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => recipe_error_response(e),
    }
}
