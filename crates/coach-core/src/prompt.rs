//! Prompt assembler.
//!
//! Builds the request sent to the completion API: persona instruction
//! first, then the full prior history in original order, then the new
//! user turn. History is never truncated or summarised.

use coach_types::config::LlmConfig;
use coach_types::message::Message;

use crate::ports::ChatRequest;

pub fn assemble<'a>(
    persona: &str,
    history: impl IntoIterator<Item = &'a Message>,
    new_input: &str,
    llm: &LlmConfig,
) -> ChatRequest {
    let mut messages = vec![Message::system(persona)];
    messages.extend(history.into_iter().cloned());
    messages.push(Message::user(new_input));

    ChatRequest {
        messages,
        model: llm.model.clone(),
        max_tokens: llm.max_tokens,
        temperature: llm.temperature,
    }
}
