pub mod analyze;

use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use souschef_core::MAX_FILE_SIZE;
use utoipa::OpenApi;

/// Headroom for the multipart envelope around the file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Returns the router for /api/v1/ingredients endpoints (mounted at /api/v1/ingredients)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze::analyze_ingredients))
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + MULTIPART_OVERHEAD))
}

#[derive(OpenApi)]
#[openapi(
    paths(analyze::analyze_ingredients),
    components(schemas(analyze::AnalyzeIngredientsRequest, souschef_core::ai::IngredientAnalysis))
)]
pub struct ApiDoc;
