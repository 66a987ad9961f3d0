mod api;
mod config;
mod telemetry;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use chrono::{DateTime, Utc};
use souschef_core::RecipeAgent;
use std::env;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;

/// Read-only state shared by all handlers.
pub struct ServerState {
    pub agent: RecipeAgent,
    pub started: Instant,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(agent: RecipeAgent) -> Self {
        Self {
            agent,
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

/// Application state shared across all handlers
pub type AppState = Arc<ServerState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi()
            .to_pretty_json()
            .context("Failed to render OpenAPI document")?;
        println!("{}", spec);
        return Ok(());
    }

    dotenvy::dotenv().ok();
    telemetry::init_telemetry()?;

    let config = ServerConfig::from_env()?;
    let agent = RecipeAgent::from_env().context("Failed to configure the generative backend")?;
    tracing::info!(model = %agent.model_name(), "Generative backend configured");

    let state: AppState = Arc::new(ServerState::new(agent));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = api::app(state)
        .merge(swagger_ui)
        .layer(cors_layer(&config.cors_origins))
        .layer(telemetry::trace_layer());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    let local_addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);
    tracing::info!(
        "OpenAPI spec available at http://{}/api-docs/openapi.json",
        local_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
