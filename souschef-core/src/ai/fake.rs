//! Fake AI client for testing.
//!
//! Returns deterministic responses routed by prompt name and by substrings of
//! the last user message, so pipelines can be exercised without network access.
//! Every request is recorded for later inspection.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};

#[derive(Debug, Clone)]
struct FakeRule {
    prompt_name: String,
    /// Matched case-insensitively against the last user message.
    contains: Option<String>,
    reply: Result<String, String>,
}

/// A fake AI client for testing.
///
/// Rules are checked in insertion order; the first rule whose prompt name
/// matches (and whose substring, if any, occurs in the payload) wins. With no
/// matching rule the call fails. A blank reply fails with
/// `AiError::EmptyResponse`, as the real client does.
#[derive(Debug, Default)]
pub struct FakeAiClient {
    rules: Vec<FakeRule>,
    calls: Mutex<Vec<(String, ChatRequest)>>,
}

impl FakeAiClient {
    /// Create a new client with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client that answers every request for `prompt_name` with `response`.
    pub fn with_response(prompt_name: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_name, response);
        client
    }

    /// Answer every request for `prompt_name` with `response`.
    pub fn add_response(&mut self, prompt_name: &str, response: &str) {
        self.rules.push(FakeRule {
            prompt_name: prompt_name.to_string(),
            contains: None,
            reply: Ok(response.to_string()),
        });
    }

    /// Answer requests for `prompt_name` whose payload contains `contains`.
    pub fn add_response_containing(&mut self, prompt_name: &str, contains: &str, response: &str) {
        self.rules.push(FakeRule {
            prompt_name: prompt_name.to_string(),
            contains: Some(contains.to_lowercase()),
            reply: Ok(response.to_string()),
        });
    }

    /// Fail every request for `prompt_name` with an API error.
    pub fn add_failure(&mut self, prompt_name: &str, message: &str) {
        self.rules.push(FakeRule {
            prompt_name: prompt_name.to_string(),
            contains: None,
            reply: Err(message.to_string()),
        });
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompt names of all requests received so far, in order.
    pub fn prompt_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// All requests received for `prompt_name`, in order.
    pub fn requests_for(&self, prompt_name: &str) -> Vec<ChatRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == prompt_name)
            .map(|(_, request)| request.clone())
            .collect()
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        let payload = request
            .last_user_content()
            .unwrap_or_default()
            .to_lowercase();

        let rule = self.rules.iter().find(|rule| {
            rule.prompt_name == prompt_name
                && rule
                    .contains
                    .as_deref()
                    .is_none_or(|needle| payload.contains(needle))
        });

        self.calls
            .lock()
            .unwrap()
            .push((prompt_name.to_string(), request));

        match rule.map(|r| &r.reply) {
            Some(Ok(content)) if content.trim().is_empty() => Err(AiError::EmptyResponse),
            Some(Ok(content)) => Ok(ChatResponse {
                content: content.clone(),
                usage: Usage::default(),
            }),
            Some(Err(message)) => Err(AiError::Api(message.clone())),
            None => Err(AiError::Api(format!(
                "FakeAiClient: no response configured for prompt '{}'",
                prompt_name
            ))),
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatMessage;

    fn request(text: &str) -> ChatRequest {
        ChatRequest {
            messages: vec![ChatMessage::system("ignored"), ChatMessage::user(text)],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_routes_by_prompt_name() {
        let client = FakeAiClient::with_response("intent", "RECIPE");
        let response = client.complete("intent", request("anything")).await.unwrap();
        assert_eq!(response.content, "RECIPE");
        assert!(client.complete("other", request("anything")).await.is_err());
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_substring_match_is_case_insensitive_and_ordered() {
        let mut client = FakeAiClient::new();
        client.add_response_containing("intent", "POTATO", "RECIPE");
        client.add_response("intent", "OTHER");

        let hit = client.complete("intent", request("I have potatoes")).await.unwrap();
        assert_eq!(hit.content, "RECIPE");
        let miss = client.complete("intent", request("a movie please")).await.unwrap();
        assert_eq!(miss.content, "OTHER");
    }

    #[tokio::test]
    async fn test_substring_ignores_system_message() {
        let mut client = FakeAiClient::new();
        client.add_response_containing("intent", "ignored", "RECIPE");
        assert!(client.complete("intent", request("hello")).await.is_err());
    }

    #[tokio::test]
    async fn test_blank_reply_is_empty_response() {
        let client = FakeAiClient::with_response("synthesis", "  \n");
        let err = client.complete("synthesis", request("x")).await.unwrap_err();
        assert!(matches!(err, AiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_failure_and_recording() {
        let mut client = FakeAiClient::new();
        client.add_failure("synthesis", "boom");

        let err = client.complete("synthesis", request("x")).await.unwrap_err();
        assert!(matches!(err, AiError::Api(ref m) if m == "boom"));
        assert_eq!(client.prompt_names(), vec!["synthesis"]);
        assert_eq!(client.requests_for("synthesis").len(), 1);
    }
}
