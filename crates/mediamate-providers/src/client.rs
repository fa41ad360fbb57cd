//! HTTP client for the provider adapter.
//!
//! One pooled `reqwest::Client` behind two single-shot operations: list the
//! provider's models, and fire a fixed test prompt at the completions
//! endpoint. No retries, no streaming, no cancellation.

use mediamate_core::ProviderSettings;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::dialect::{detect_dialect, ModelsRequest};
use crate::error::ProviderError;

/// Greeting sent by [`ProviderClient::send_test_prompt`].
pub const TEST_PROMPT: &str = "Hello! Please reply with a short greeting.";

/// HTTP client for model listing and test calls.
pub struct ProviderClient {
    http: reqwest::Client,
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self { http }
    }

    /// List the models the configured provider offers, provider order
    /// preserved.
    ///
    /// Fails with [`ProviderError::MissingCredential`] before any I/O when
    /// the endpoint or key is empty, [`ProviderError::UnsupportedProvider`]
    /// when the URL matches no dialect, [`ProviderError::Transport`] on
    /// network failure or a non-2xx status, and
    /// [`ProviderError::MalformedResponse`] when the body matches neither
    /// expected shape.
    pub async fn list_models(
        &self,
        settings: &ProviderSettings,
    ) -> Result<Vec<String>, ProviderError> {
        if !settings.has_credentials() {
            return Err(ProviderError::MissingCredential);
        }
        let spec = detect_dialect(&settings.endpoint_url)?;
        let request = (spec.build_models_request)(settings);

        debug!(provider = spec.display_name, url = %request.url, "listing models");

        let body = self.fetch_models_body(&request).await?;
        let models = (spec.map_models)(&body).ok_or_else(|| {
            error!(provider = spec.display_name, "model list has unexpected shape");
            ProviderError::MalformedResponse(format!(
                "no model list found in {} response",
                spec.display_name
            ))
        })?;

        debug!(provider = spec.display_name, count = models.len(), "models listed");
        Ok(models)
    }

    async fn fetch_models_body(&self, request: &ModelsRequest) -> Result<Value, ProviderError> {
        let mut builder = self.http.get(&request.url);
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("model list request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            error!(%status, body = %body, "model list request rejected");
            return Err(ProviderError::Transport(format!("{status}: {body}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }

    /// POST a fixed greeting to the configured completions endpoint and
    /// return the response body as display text (pretty-printed when it
    /// parses as JSON).
    ///
    /// Fails with [`ProviderError::MissingConfig`] before any I/O when the
    /// endpoint, key, or selected model is empty, and with
    /// [`ProviderError::Transport`] on network failure or a non-2xx status.
    pub async fn send_test_prompt(
        &self,
        settings: &ProviderSettings,
    ) -> Result<String, ProviderError> {
        if !settings.is_complete() {
            return Err(ProviderError::MissingConfig);
        }

        let body = json!({
            "model": settings.selected_model,
            "messages": [{"role": "user", "content": TEST_PROMPT}],
        });

        debug!(url = %settings.endpoint_url, model = %settings.selected_model, "sending test prompt");

        let response = self
            .http
            .post(&settings.endpoint_url)
            .bearer_auth(&settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("test prompt failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("failed to read response: {e}")))?;

        if !status.is_success() {
            error!(%status, body = %text, "test prompt rejected");
            return Err(ProviderError::Transport(format!("{status}: {text}")));
        }

        Ok(prettify(text))
    }

}

/// Display formatting only: pretty-print when the body is JSON, otherwise
/// hand the raw text back.
fn prettify(text: String) -> String {
    match serde_json::from_str::<Value>(&text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or(text),
        Err(_) => text,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(url: &str, key: &str, model: &str) -> ProviderSettings {
        ProviderSettings {
            endpoint_url: url.to_string(),
            api_key: key.to_string(),
            selected_model: model.to_string(),
            ..Default::default()
        }
    }

    /// Endpoint that contains "openai" so detection picks the
    /// OpenAI-compatible dialect while still pointing at the mock server.
    fn openai_endpoint(server: &MockServer) -> String {
        format!("{}/openai/v1/chat/completions", server.uri())
    }

    // ── list_models, OpenAI-compatible ──

    #[tokio::test]
    async fn list_models_maps_openai_shape_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/openai/v1/models"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "m1"}, {"id": "m2"}]
            })))
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let models = client
            .list_models(&settings(&openai_endpoint(&server), "sk-test", ""))
            .await
            .unwrap();

        assert_eq!(models, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn list_models_rejects_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/openai/v1/models"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "invalid api key"}
            })))
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let err = client
            .list_models(&settings(&openai_endpoint(&server), "sk-bad", ""))
            .await
            .unwrap_err();

        match err {
            ProviderError::Transport(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("invalid api key"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_models_rejects_unexpected_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/openai/v1/models"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"results": ["m1"]})),
            )
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let err = client
            .list_models(&settings(&openai_endpoint(&server), "sk-test", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn list_models_with_empty_key_makes_no_request() {
        let server = MockServer::start().await;
        // Any request reaching the server would fail the expectation.
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let err = client
            .list_models(&settings(&openai_endpoint(&server), "", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::MissingCredential));
    }

    #[tokio::test]
    async fn list_models_rejects_unknown_provider() {
        let client = ProviderClient::new();
        let err = client
            .list_models(&settings("https://example.com/api", "key", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::UnsupportedProvider(_)));
    }

    #[tokio::test]
    async fn list_models_reports_connect_failure_as_transport() {
        // Nothing is listening on port 1.
        let client = ProviderClient::new();
        let err = client
            .list_models(&settings("http://127.0.0.1:1/openai/v1", "key", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Transport(_)));
    }

    // ── list_models, Gemini ──
    //
    // The Gemini dialect targets a fixed public URL, so the end-to-end path
    // is exercised through the request/mapper internals against the mock.

    #[tokio::test]
    async fn gemini_body_maps_through_fetch_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(query_param("key", "AIza-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "models": [{"name": "g1"}]
            })))
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let request = ModelsRequest {
            url: format!("{}/v1beta/models?key=AIza-test", server.uri()),
            bearer: None,
        };
        let body = client.fetch_models_body(&request).await.unwrap();

        let spec = detect_dialect("https://generativelanguage.googleapis.com/v1beta").unwrap();
        assert_eq!((spec.map_models)(&body), Some(vec!["g1".to_string()]));
    }

    // ── send_test_prompt ──

    #[tokio::test]
    async fn test_prompt_posts_model_and_greeting() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "moonshot-v1-8k",
                "messages": [{"role": "user", "content": TEST_PROMPT}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "hi"}}]
            })))
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let text = client
            .send_test_prompt(&settings(
                &openai_endpoint(&server),
                "sk-test",
                "moonshot-v1-8k",
            ))
            .await
            .unwrap();

        // Pretty-printed JSON spans multiple lines.
        assert!(text.contains("\"choices\""));
        assert!(text.contains('\n'));
    }

    #[tokio::test]
    async fn test_prompt_without_model_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let err = client
            .send_test_prompt(&settings(&openai_endpoint(&server), "sk-test", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::MissingConfig));
    }

    #[tokio::test]
    async fn test_prompt_surfaces_api_error_as_transport() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = ProviderClient::new();
        let err = client
            .send_test_prompt(&settings(&openai_endpoint(&server), "sk-test", "m1"))
            .await
            .unwrap_err();

        match err {
            ProviderError::Transport(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("rate limited"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn prettify_passes_non_json_through() {
        assert_eq!(prettify("plain text".to_string()), "plain text");
    }
}
