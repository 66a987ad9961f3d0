use crate::api::{error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use souschef_core::ai::IngredientAnalysis;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeIngredientsRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Recognize the ingredients in a photo
///
/// Backend failures are reported with `success: false`; only an unreadable or
/// unsupported upload is rejected.
#[utoipa::path(
    post,
    path = "/api/v1/ingredients/analyze",
    tag = "ingredients",
    request_body(content_type = "multipart/form-data", content = AnalyzeIngredientsRequest),
    responses(
        (status = 200, description = "Recognized ingredients", body = IngredientAnalysis),
        (status = 400, description = "Missing, unreadable or unsupported image", body = ErrorResponse)
    )
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return error_response(StatusCode::BAD_REQUEST, "No file provided"),
            Err(e) => {
                tracing::warn!("Multipart read error: {}", e);
                return error_response(
                    e.status(),
                    format!("Failed to read multipart data: {}", e.body_text()),
                );
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let data = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Field read error: {}", e);
                return error_response(
                    e.status(),
                    format!("Failed to read file data: {}", e.body_text()),
                );
            }
        };

        return match state.agent.analyze_ingredients(data.to_vec()).await {
            Ok(analysis) => Json(analysis).into_response(),
            Err(e) => error_response(StatusCode::BAD_REQUEST, e),
        };
    }
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{app, send};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use souschef_core::ai::prompts::vision::VISION_PROMPT_NAME;
    use souschef_core::ai::FakeAiClient;

    const BOUNDARY: &str = "souschef-test-boundary";

    fn upload(field: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
                 filename=\"photo.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/ingredients/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    // 1x1 transparent PNG.
    const PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[tokio::test]
    async fn test_analyze_photo() {
        let client = FakeAiClient::with_response(
            VISION_PROMPT_NAME,
            r#"{"ingredients": ["tomato", "egg"], "confidence": "high"}"#,
        );

        let (status, body) = send(app(client), upload("file", PNG)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["ingredients"][1], "egg");
        assert_eq!(body["confidence"], "high");
    }

    #[tokio::test]
    async fn test_not_an_image() {
        let (status, body) = send(app(FakeAiClient::new()), upload("file", b"hello")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_file_field() {
        let (status, body) = send(app(FakeAiClient::new()), upload("photo", PNG)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file provided");
    }

    #[tokio::test]
    async fn test_backend_failure_is_reported_in_body() {
        let mut client = FakeAiClient::new();
        client.add_failure(VISION_PROMPT_NAME, "vision model offline");

        let (status, body) = send(app(client), upload("file", PNG)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("vision model offline"));
    }
}
