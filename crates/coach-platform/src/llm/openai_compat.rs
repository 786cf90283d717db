//! OpenAI-compatible completion adapter.
//!
//! Works with OpenAI, DeepSeek and any provider using the OpenAI chat
//! completions API format. Uses browser `fetch()` via gloo-net for WASM
//! compatibility. One attempt per call; retry is the user's resubmission.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use coach_core::ports::{ChatRequest, ChatResponse, CompletionPort, TokenUsage};
use coach_types::{config::LlmConfig, message::Message, CoachError, Result};

/// Client that speaks the OpenAI chat completions protocol.
pub struct OpenAiCompatClient {
    config: LlmConfig,
    base_url: String,
}

impl OpenAiCompatClient {
    pub fn new(config: LlmConfig) -> Self {
        let base_url = config
            .api_base
            .clone()
            .unwrap_or_else(|| config.provider.default_base_url().to_string());
        Self { config, base_url }
    }
}

#[async_trait(?Send)]
impl CompletionPort for OpenAiCompatClient {
    async fn complete(&self, req: ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = request_body(&req);
        log::debug!("completion request: {} messages to {}", req.messages.len(), url);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &format!("Bearer {}", self.config.api_key))
            .json(&body)
            .map_err(|e| CoachError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| CoachError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CoachError::Upstream(format!("HTTP {}: {}", status, text)));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| CoachError::Upstream(e.to_string()))?;

        parse_response(data)
    }
}

// ─── Wire format ─────────────────────────────────────────────

/// Build the JSON body for a chat completions request.
#[doc(hidden)]
pub fn request_body(req: &ChatRequest) -> Value {
    let messages: Vec<Value> = req.messages.iter().map(message_to_json).collect();

    json!({
        "model": req.model,
        "messages": messages,
        "max_tokens": req.max_tokens,
        "temperature": req.temperature,
    })
}

fn message_to_json(msg: &Message) -> Value {
    json!({
        "role": msg.role,
        "content": msg.text,
    })
}

/// Extract the generated text (first choice) and optional usage.
#[doc(hidden)]
pub fn parse_response(data: ApiResponse) -> Result<ChatResponse> {
    let choice = data
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CoachError::Upstream("No choices in response".to_string()))?;

    let usage = data.usage.map(|u| TokenUsage {
        prompt_tokens: u.prompt_tokens,
        completion_tokens: u.completion_tokens,
        total_tokens: u.total_tokens,
    });

    Ok(ChatResponse {
        text: choice.message.content.unwrap_or_default(),
        usage,
    })
}

#[doc(hidden)]
#[derive(Deserialize)]
pub struct ApiResponse {
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
