use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub build_id: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub uptime_readable: String,
    /// Configured backend per component.
    pub components: BTreeMap<String, String>,
}

/// "2d 3h 4m 5s", leaving out leading zero units.
fn readable_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = seconds % 86_400 / 3_600;
    let minutes = seconds % 3_600 / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{}d {}h {}m {}s", days, hours, minutes, secs)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = state.started.elapsed().as_secs();

    let mut components = BTreeMap::new();
    components.insert(
        "text_backend".to_string(),
        state.agent.model_name().to_string(),
    );

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        build_id: souschef_core::BUILD_ID.to_string(),
        started_at: state.started_at,
        uptime_seconds,
        uptime_readable: readable_uptime(uptime_seconds),
        components,
    })
}

/// Returns the router for the health probe (mounted at the root)
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(OpenApi)]
#[openapi(paths(health), components(schemas(HealthResponse)))]
pub struct ApiDoc;
