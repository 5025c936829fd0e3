//! Gemini LLM Gateway implementation

use super::error::{GeminiError, Result};
use super::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use crate::credentials::ApiKey;
use assistant_application::ports::llm_gateway::{GatewayError, LlmGateway};
use assistant_domain::util::log_preview;
use assistant_domain::{Model, Question, answer_or_fallback};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Default API origin
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    model: Model,
    api_key: Option<ApiKey>,
}

impl GeminiGateway {
    /// Create a gateway against the public endpoint.
    ///
    /// A missing key is not an error here; calls fail with
    /// [`GatewayError::ServiceUnavailable`] instead.
    pub fn new(model: Model, api_key: Option<ApiKey>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            api_key,
        }
    }

    pub fn from_config(config: &FileGeminiConfig, api_key: Option<ApiKey>) -> Self {
        Self::new(config.model.clone(), api_key).with_base_url(&config.base_url)
    }

    /// Point the gateway at another origin (proxy, test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let api_key = self.api_key.as_ref().ok_or(GeminiError::MissingApiKey)?;

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key.expose())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: ErrorResponse::describe(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn fetch_answer(&self, prompt: &str) -> std::result::Result<String, GatewayError> {
        if Question::is_blank(prompt) {
            return Err(GatewayError::InvalidInput);
        }

        debug!(
            model = %self.model,
            "generateContent: {}",
            log_preview(prompt, 80)
        );

        let response = self.generate(prompt).await.map_err(|e| {
            warn!(model = %self.model, "Gemini request failed: {}", e);
            GatewayError::from(e)
        })?;

        let text = response.text();
        if text.as_deref().is_none_or(str::is_empty) {
            debug!(
                reason = response.empty_reason().unwrap_or("none"),
                "Empty response payload, using fallback answer"
            );
        }
        Ok(answer_or_fallback(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::FALLBACK_ANSWER;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// One-shot HTTP server: answers a single request with `status` and
    /// `body`, and hands back the raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let reply = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (base_url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn gateway(base_url: &str) -> GeminiGateway {
        GeminiGateway::new(Model::default(), ApiKey::new("test-key")).with_base_url(base_url)
    }

    #[test]
    fn test_endpoint() {
        let gw = GeminiGateway::new(Model::default(), None);
        assert_eq!(
            gw.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let gw =
            GeminiGateway::new(Model::Gemini25Pro, None).with_base_url("http://localhost:8080/");
        assert_eq!(
            gw.endpoint(),
            "http://localhost:8080/v1beta/models/gemini-2.5-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn test_blank_prompt_is_invalid_input() {
        // Unroutable base URL: a network call would fail differently
        let gw = gateway("http://127.0.0.1:1");
        assert_eq!(gw.fetch_answer("").await, Err(GatewayError::InvalidInput));
        assert_eq!(gw.fetch_answer("  \n ").await, Err(GatewayError::InvalidInput));
    }

    #[tokio::test]
    async fn test_missing_key_is_service_unavailable() {
        let gw = GeminiGateway::new(Model::default(), None).with_base_url("http://127.0.0.1:1");
        let err = gw.fetch_answer("test").await.unwrap_err();
        assert_eq!(err.kind(), "service_unavailable");
    }

    #[tokio::test]
    async fn test_connection_refused_is_service_unavailable() {
        let gw = gateway("http://127.0.0.1:1");
        let err = gw.fetch_answer("test").await.unwrap_err();
        assert!(matches!(err, GatewayError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_success_returns_text_and_sends_expected_request() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"Rayleigh scattering..."}]}}]}"#,
        )
        .await;

        let answer = gateway(&base_url).fetch_answer("Why is the sky blue?").await;
        assert_eq!(answer.as_deref(), Ok("Rayleigh scattering..."));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent "));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains(r#"{"contents":[{"parts":[{"text":"Why is the sky blue?"}]}]}"#));
    }

    #[tokio::test]
    async fn test_empty_payload_uses_fallback() {
        let (base_url, _server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":""}]},"finishReason":"STOP"}]}"#,
        )
        .await;

        let answer = gateway(&base_url).fetch_answer("something odd").await;
        assert_eq!(answer.as_deref(), Ok(FALLBACK_ANSWER));
    }

    #[tokio::test]
    async fn test_missing_candidates_uses_fallback() {
        let (base_url, _server) =
            serve_once("200 OK", r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).await;

        let answer = gateway(&base_url).fetch_answer("something odd").await;
        assert_eq!(answer.as_deref(), Ok(FALLBACK_ANSWER));
    }

    #[tokio::test]
    async fn test_http_error_is_service_unavailable() {
        let (base_url, _server) = serve_once(
            "403 Forbidden",
            r#"{"error":{"code":403,"message":"API key not valid.","status":"PERMISSION_DENIED"}}"#,
        )
        .await;

        let err = gateway(&base_url).fetch_answer("test").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::ServiceUnavailable(
                "API error (HTTP 403): API key not valid. (PERMISSION_DENIED)".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_service_unavailable() {
        let (base_url, _server) = serve_once("200 OK", "not json").await;

        let err = gateway(&base_url).fetch_answer("test").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::ServiceUnavailable(msg) if msg.starts_with("Failed to decode")
        ));
    }
}
