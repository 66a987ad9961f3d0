pub mod generate;
pub mod image;
pub mod optimize;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/v1/recipes endpoints (mounted at /api/v1/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate::generate_recipe))
        .route("/generate-image", post(image::generate_image))
        .route("/optimize", post(optimize::optimize_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        generate::generate_recipe,
        image::generate_image,
        optimize::optimize_recipe,
    ),
    components(schemas(
        generate::GenerateRecipeRequest,
        image::GenerateImageRequest,
        image::GenerateImageResponse,
        souschef_core::Recipe,
        souschef_core::RecipeIngredient,
        souschef_core::InstructionStep,
        souschef_core::NutritionalInfo,
        souschef_core::OptimizationRequest,
        souschef_core::OptimizeOutcome,
        souschef_core::OffTopicReminder,
        souschef_core::ReminderKind,
        souschef_core::ConversationTurn,
        souschef_core::ConversationRole,
    ))
)]
pub struct ApiDoc;
