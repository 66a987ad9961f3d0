use crate::api::{recipe_error_response, ErrorResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use souschef_core::{OptimizationRequest, OptimizeOutcome};

/// Refine a recipe with a follow-up instruction
///
/// Stateless: the caller sends the current recipe and any earlier turns on
/// every call. Instructions unrelated to the recipe return an off-topic
/// reminder instead of a recipe.
#[utoipa::path(
    post,
    path = "/api/v1/recipes/optimize",
    tag = "recipes",
    request_body = OptimizationRequest,
    responses(
        (status = 200, description = "Refined recipe or off-topic reminder", body = OptimizeOutcome),
        (status = 400, description = "Empty instruction", body = ErrorResponse),
        (status = 500, description = "Backend reply matched neither shape", body = ErrorResponse),
        (status = 503, description = "Backend unavailable", body = ErrorResponse)
    )
)]
pub async fn optimize_recipe(
    State(state): State<AppState>,
    Json(request): Json<OptimizationRequest>,
) -> impl IntoResponse {
    match state.agent.optimize_recipe(&request).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => recipe_error_response(e),
    }
}
