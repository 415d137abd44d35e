// Brain client - HTTP communication with the model backend

use super::types::ApiErrorBody;
use super::{BrainConfig, BrainError, GenerateRequest, GenerateResponse};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Brain client for model inference
///
/// Holds no credential; every call is made with the key handed in by the
/// caller so that rotation stays outside the transport.
#[derive(Clone)]
pub struct Brain {
    config: BrainConfig,
    client: Client,
}

impl Brain {
    /// Create a new Brain instance
    pub fn new(config: BrainConfig) -> Result<Self, super::BrainInitError> {
        info!(
            endpoint = %config.endpoint,
            model = %config.model,
            timeout_secs = config.request_timeout_secs,
            "initializing brain"
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(super::BrainInitError::ClientError)?;

        Ok(Self { config, client })
    }

    /// Get model identifier
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Get max output tokens
    pub fn max_output_tokens(&self) -> u32 {
        self.config.max_output_tokens
    }

    /// Perform one generation call and return the reply text
    ///
    /// Exactly one HTTP request is made; failures are returned, never retried.
    /// The text may be empty when the model produced no candidate.
    pub async fn generate(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> Result<String, BrainError> {
        info!(
            model = %request.model,
            contents = request.contents.len(),
            has_system = request.system_instruction.is_some(),
            temperature = ?request.generation_config.temperature,
            "starting generation"
        );

        let start = Instant::now();
        let response = self.send_request(api_key, request).await?;
        let text = response.text();

        let (prompt_tokens, output_tokens) = response
            .usage_metadata
            .as_ref()
            .map(|u| (u.prompt_token_count, u.candidates_token_count))
            .unwrap_or((0, 0));

        info!(
            model_version = response.model_version.as_deref().unwrap_or("unknown"),
            prompt_tokens = prompt_tokens,
            output_tokens = output_tokens,
            latency_ms = start.elapsed().as_millis() as u64,
            finish_reason = ?response.candidates.first().and_then(|c| c.finish_reason.clone()),
            "generation completed"
        );

        // A blank reply is the caller's to reject, not a transport failure
        if text.trim().is_empty() {
            warn!(candidates = response.candidates.len(), "model returned no text");
        }

        Ok(text)
    }

    fn url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            model
        )
    }

    async fn send_request(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, BrainError> {
        let url = self.url(&request.model);

        debug!(url = %url, "sending HTTP request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received HTTP response");

        let body = response.text().await?;

        if status.is_success() {
            let body_preview = if body.len() > 200 {
                format!("{}...", body.chars().take(200).collect::<String>())
            } else {
                body.clone()
            };
            debug!(response_preview = %body_preview, "response body received");

            let response: GenerateResponse = serde_json::from_str(&body)?;
            return Ok(response);
        }

        if status.as_u16() == 400 {
            return Err(BrainError::InvalidRequest(body));
        }

        let (reason, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => (parsed.error.status, parsed.error.message),
            Err(_) => (
                status.canonical_reason().unwrap_or("UNKNOWN").to_string(),
                body,
            ),
        };

        Err(BrainError::Api {
            status: status.as_u16(),
            reason,
            message,
        })
    }
}
