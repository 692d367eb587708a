// src/generate/anthropic.rs
// =============================================================================
// Text generation through the Anthropic Messages API.
//
// Request:
//   POST {endpoint}
//   x-api-key: <key>
//   anthropic-version: 2023-06-01
//   {"model": ..., "max_tokens": ..., "messages": [{"role": "user", "content": prompt}]}
//
// Response: the text of the first "text" block in `content`.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TextGenerator;
use crate::config::GenerationConfig;
use crate::error::GenerationError;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

pub struct AnthropicGenerator {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl AnthropicGenerator {
    // Returns Disabled when the configuration carries no usable API key
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = match config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(GenerationError::Disabled),
        };

        let client = Client::builder()
            .timeout(config.request_timeout)
            .use_rustls_tls()
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, GenerationError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, max_tokens, prompt_chars = prompt.len(), "Requesting suggestions");

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        reply
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| GenerationError::Malformed("reply has no text block".to_string()))
    }
}
