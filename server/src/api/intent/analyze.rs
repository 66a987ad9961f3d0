use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeIntentRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzeIntentResponse {
    pub is_recipe_request: bool,
}

/// Decide whether a message asks for cooking help
///
/// Fails closed: if the backend cannot be reached the answer is `false`.
#[utoipa::path(
    post,
    path = "/api/v1/intent/analyze",
    tag = "intent",
    request_body = AnalyzeIntentRequest,
    responses(
        (status = 200, description = "Classification result", body = AnalyzeIntentResponse)
    )
)]
pub async fn analyze_intent(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeIntentRequest>,
) -> Json<AnalyzeIntentResponse> {
    let is_recipe_request = state.agent.classify_intent(&request.message).await;
    Json(AnalyzeIntentResponse { is_recipe_request })
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{app, post_json, send};
    use axum::http::StatusCode;
    use serde_json::json;
    use souschef_core::ai::prompts::intent::{INTENT_PROMPT_NAME, IN_DOMAIN_TOKEN, OFF_TOPIC_TOKEN};
    use souschef_core::ai::FakeAiClient;

    fn classifier() -> FakeAiClient {
        let mut client = FakeAiClient::new();
        client.add_response_containing(INTENT_PROMPT_NAME, "potato", IN_DOMAIN_TOKEN);
        client.add_response_containing(INTENT_PROMPT_NAME, "movie", OFF_TOPIC_TOKEN);
        client
    }

    #[tokio::test]
    async fn test_recipe_request() {
        let (status, body) = send(
            app(classifier()),
            post_json(
                "/api/v1/intent/analyze",
                json!({"message": "I want to cook something with potatoes"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"is_recipe_request": true}));
    }

    #[tokio::test]
    async fn test_other_request() {
        let (_, body) = send(
            app(classifier()),
            post_json(
                "/api/v1/intent/analyze",
                json!({"message": "recommend me a movie"}),
            ),
        )
        .await;
        assert_eq!(body, json!({"is_recipe_request": false}));
    }
}
