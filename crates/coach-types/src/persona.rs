//! The Gym Coach persona: the fixed system instruction sent with every
//! completion request, the seed turns shown at session start, and the
//! advisory conversation phase.
//!
//! The persona text is never appended to the visible conversation; the
//! prompt assembler injects it as the first message of each request.

use serde::{Deserialize, Serialize};

pub const PERSONA_INSTRUCTION: &str = r#"You are Gym Coach, a professional fitness assistant.

You guide each client through two phases:
1. Evaluation: understand their context before advising. Ask about their
   main goal (training, nutrition, supplementation or organization),
   current routine, experience level and any constraints or injuries.
   Ask one question at a time.
2. Planning: once you understand the context, give concrete, practical
   recommendations for the chosen area, structured in small steps.

Keep answers concise and professional. Never give medical diagnoses;
recommend seeing a doctor or registered professional for health issues.
"#;

/// Introduction shown as the first assistant turn of a session.
pub const GREETING: &str =
    "Hi, I'm Gym Coach, your professional fitness assistant. \
     Before we start, I'd like to understand your context a little better.";

/// Opening question that guides the conversation.
pub const OPENING_QUESTION: &str =
    "What is your main goal today? (training, nutrition, supplementation or organization)";

/// Advisory phase of the conversation. Never gates any operation;
/// it only reflects where the dialogue is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Evaluation,
    Planning,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Evaluation => "Evaluation",
            Phase::Planning => "Planning",
        }
    }
}
