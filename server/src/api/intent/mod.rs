pub mod analyze;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/v1/intent endpoints (mounted at /api/v1/intent)
pub fn router() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze::analyze_intent))
}

#[derive(OpenApi)]
#[openapi(
    paths(analyze::analyze_intent),
    components(schemas(analyze::AnalyzeIntentRequest, analyze::AnalyzeIntentResponse))
)]
pub struct ApiDoc;
