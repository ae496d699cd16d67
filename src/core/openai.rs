//! OpenAI chat-completions client
//!
//! One request per invocation: a fixed system instruction plus the captured
//! text as the user message. No retries and no rate-limit handling; a failed
//! call is a terminal outcome for that request.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Rewriter;
use crate::config::Config;
use crate::error::{BlurError, BlurResult};

/// System instruction sent with every request.
const SYSTEM_PROMPT: &str = "You are a helpful assistant that improves text clarity \
and fixes grammar, spelling, and punctuation. Keep the same meaning but make it \
clearer and more professional. Maintain the original tone and intent.";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    api_base: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: &Config, api_key: String) -> Self {
        Self {
            api_base: config.api_base.clone(),
            api_key,
            model: config.model.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    fn request_body<'a>(&'a self, text: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: text },
            ],
        }
    }
}

#[async_trait]
impl Rewriter for OpenAiClient {
    async fn rewrite(&self, text: &str) -> BlurResult<String> {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(text))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| BlurError::Remote(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BlurError::Remote(e.to_string()))?;

        if !status.is_success() {
            return Err(BlurError::Remote(format!("{}: {}", status, body)));
        }
        debug!("Completion raw body: {}", body);

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| BlurError::Remote(format!("unexpected response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| BlurError::Remote("response contained no choices".to_string()))
    }
}
