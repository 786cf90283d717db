use serde::{Deserialize, Serialize};

use crate::error::CoachError;
use crate::persona::PERSONA_INSTRUCTION;
use crate::Result;

/// Credential variable expected from the host environment.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    pub llm: LlmConfig,
    pub persona: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            persona: PERSONA_INSTRUCTION.to_string(),
        }
    }
}

impl CoachConfig {
    /// Build a config from a resolved credential.
    ///
    /// A missing or blank key is fatal: the session must refuse to start
    /// before any turn exists.
    pub fn with_api_key(api_key: Option<String>) -> Result<Self> {
        match api_key {
            Some(key) if !key.trim().is_empty() => {
                let mut config = Self::default();
                config.llm.api_key = key;
                Ok(config)
            }
            _ => Err(CoachError::Config(format!(
                "{} is not set. Provide it to the hosting page or the build environment.",
                API_KEY_VAR
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub model: String,
    pub api_key: String,
    pub api_base: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAI,
            model: "gpt-4".to_string(),
            api_key: String::new(),
            api_base: None,
            max_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Completion providers, all speaking the OpenAI chat completions protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LlmProvider {
    OpenAI,
    DeepSeek,
    Groq,
    Custom,
}

impl LlmProvider {
    pub fn default_base_url(&self) -> &str {
        match self {
            LlmProvider::OpenAI => "https://api.openai.com",
            LlmProvider::DeepSeek => "https://api.deepseek.com",
            LlmProvider::Groq => "https://api.groq.com/openai",
            LlmProvider::Custom => "",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LlmProvider::OpenAI => "OpenAI",
            LlmProvider::DeepSeek => "DeepSeek",
            LlmProvider::Groq => "Groq",
            LlmProvider::Custom => "Custom",
        }
    }
}
