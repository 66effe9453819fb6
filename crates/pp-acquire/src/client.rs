//! Generative model clients.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ureq::Agent;

use crate::error::ModelError;

/// Default Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model name.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_output_tokens: 4096,
        }
    }
}

/// A single text generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    /// Full request text (instruction plus user request).
    pub text: String,
    pub sampling: SamplingParams,
}

/// Text-in, text-out generative model.
pub trait ModelClient {
    /// Generate a reply for one request.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the model cannot be reached or produces
    /// no usable text.
    fn generate(&self, request: &ModelRequest) -> Result<String, ModelError>;
}

impl<C: ModelClient + ?Sized> ModelClient for &C {
    fn generate(&self, request: &ModelRequest) -> Result<String, ModelError> {
        (**self).generate(request)
    }
}

impl<C: ModelClient + ?Sized> ModelClient for Box<C> {
    fn generate(&self, request: &ModelRequest) -> Result<String, ModelError> {
        (**self).generate(request)
    }
}

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Blocking client for the Gemini `generateContent` API.
pub struct GeminiClient {
    agent: Agent,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client. The agent is reused across requests.
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    /// Model name requests are sent to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request URL. The API key travels in [`API_KEY_HEADER`], never here.
    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ModelClient for GeminiClient {
    fn generate(&self, request: &ModelRequest) -> Result<String, ModelError> {
        let body = GenerateRequest::new(request);
        debug!(
            model = %self.model,
            request_bytes = request.text.len(),
            "Sending generation request"
        );

        let response = self
            .agent
            .post(&self.endpoint())
            .header("Accept", "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send_json(&body)?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ModelError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let raw = body_reader.read_to_string()?;
        let reply: GenerateResponse = serde_json::from_str(&raw)?;
        let text = reply.text().ok_or(ModelError::EmptyResponse)?;
        debug!(response_bytes = text.len(), "Received generation response");
        Ok(text)
    }
}

/// Client used when no model is configured. Every call fails.
#[derive(Debug, Clone, Default)]
pub struct OfflineClient {
    reason: Option<String>,
}

impl OfflineClient {
    /// Create an offline client reporting the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl ModelClient for OfflineClient {
    fn generate(&self, _request: &ModelRequest) -> Result<String, ModelError> {
        Err(ModelError::Unavailable(
            self.reason
                .clone()
                .unwrap_or_else(|| "no API key configured".to_owned()),
        ))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

impl<'a> GenerateRequest<'a> {
    fn new(request: &'a ModelRequest) -> Self {
        Self {
            contents: [Content {
                parts: [Part {
                    text: &request.text,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.sampling.temperature,
                top_p: request.sampling.top_p,
                max_output_tokens: request.sampling.max_output_tokens,
            },
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
