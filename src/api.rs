//! Chat-completion API interaction.
//!
//! This module provides the interface used to ask an OpenAI-compatible
//! provider for a JSON completion.
//!
//! # Architecture
//!
//! - [`ChatClient`]: Core trait defining async JSON-mode completion
//! - [`OpenAiClient`]: `reqwest` implementation against `/chat/completions`
//!
//! Retrying is not done here; callers wrap the generation step in
//! [`crate::retry::Retry`].

use crate::error::AutopostError;
use crate::utils::truncate_for_log;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tracing::{debug, instrument, warn};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const TEMPERATURE: f32 = 0.7;

/// Trait for async JSON-mode chat completion.
///
/// Implementors send a system and a user prompt and return the raw text of the
/// single completion, which is expected (but not guaranteed) to be a JSON
/// object.
pub trait ChatClient {
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, AutopostError>;
}

impl<C: ChatClient + ?Sized> ChatClient for &C {
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, AutopostError> {
        (**self).complete_json(system, user).await
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, AutopostError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AutopostError::Client(e.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl ChatClient for OpenAiClient {
    #[instrument(level = "info", skip_all, fields(model = %self.model))]
    async fn complete_json(&self, system: &str, user: &str) -> Result<String, AutopostError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: TEMPERATURE,
        };

        let t0 = Instant::now();
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = t0.elapsed().as_millis() as u64;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                elapsed_ms,
                body = %truncate_for_log(&body, 500),
                "Chat completion request failed"
            );
            return Err(AutopostError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        debug!(elapsed_ms, bytes = body.len(), "Chat completion received");
        extract_completion(&body)
    }
}

/// Pull the first choice's text out of a chat-completions response body.
fn extract_completion(body: &str) -> Result<String, AutopostError> {
    let parsed: ChatResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|text| !text.trim().is_empty())
        .ok_or(AutopostError::EmptyCompletion)
}
