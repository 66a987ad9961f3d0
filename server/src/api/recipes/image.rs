use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use souschef_core::Recipe;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateImageRequest {
    pub recipe_json: Recipe,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateImageResponse {
    /// `null` when no image could be produced.
    pub image_url: Option<String>,
}

/// Generate a photo of a finished dish
///
/// Image synthesis is best-effort: failures yield `image_url: null`.
#[utoipa::path(
    post,
    path = "/api/v1/recipes/generate-image",
    tag = "recipes",
    request_body = GenerateImageRequest,
    responses(
        (status = 200, description = "Image URL, or null", body = GenerateImageResponse)
    )
)]
pub async fn generate_image(
    State(state): State<AppState>,
    Json(request): Json<GenerateImageRequest>,
) -> Json<GenerateImageResponse> {
    let image_url = state.agent.generate_image(&request.recipe_json).await;
    Json(GenerateImageResponse { image_url })
}
