pub mod health;
pub mod ingredients;
pub mod intent;
pub mod recipes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::Serialize;
use souschef_core::{RecipeError, StatusClass};
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Map a pipeline failure to its status code.
pub fn recipe_error_response(e: RecipeError) -> Response {
    let status = match e.status_class() {
        StatusClass::BadRequest => StatusCode::BAD_REQUEST,
        StatusClass::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        StatusClass::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
    };
    if status.is_server_error() {
        tracing::warn!(error = %e, "Recipe pipeline failed");
    }
    error_response(status, e.to_string())
}

/// All API routes with state applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/recipes", recipes::router())
        .nest("/api/v1/ingredients", ingredients::router())
        .nest("/api/v1/intent", intent::router())
        .with_state(state)
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "SousChef API"),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        health::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        ingredients::ApiDoc::openapi(),
        intent::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}


#[cfg(test)]
mod tests {
    use super::*;
    use souschef_core::ai::AiError;
    use souschef_core::FormatError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            recipe_error_response(RecipeError::EmptyInput).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            recipe_error_response(FormatError::Synthesis("bad".to_string()).into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            recipe_error_response(AiError::EmptyResponse.into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            recipe_error_response(AiError::Api("connection refused".to_string()).into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_openapi_lists_every_route() {
        let spec = openapi();
        for path in [
            "/health",
            "/api/v1/recipes/generate",
            "/api/v1/recipes/generate-image",
            "/api/v1/recipes/optimize",
            "/api/v1/ingredients/analyze",
            "/api/v1/intent/analyze",
        ] {
            assert!(spec.paths.paths.contains_key(path), "{} missing", path);
        }
    }
}
