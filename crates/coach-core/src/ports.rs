//! Port traits — the hexagonal architecture boundary.
//!
//! The trait is defined here in `coach-core` (pure Rust).
//! Implementations live in `coach-platform` (browser adapters).
//! The core never imports platform code; it only depends on this trait.

use async_trait::async_trait;
use coach_types::{message::Message, Result};

/// Request to send to the completion API: the persona instruction,
/// the full prior history and the new user turn, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response from the completion API
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait(?Send)]
pub trait CompletionPort {
    /// One completion attempt. No retry or backoff; a failed turn is
    /// retried by the user submitting again.
    async fn complete(&self, req: ChatRequest) -> Result<ChatResponse>;
}
