use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoachError {
    /// Missing or invalid startup configuration. Fatal: the session must
    /// refuse to start.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The completion API rejected the request or returned garbage.
    /// Recoverable at the turn level.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The completion API could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoachError {
    /// Whether the session can continue after this error (the user may
    /// retry by submitting again).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CoachError::Config(_))
    }
}

impl From<serde_json::Error> for CoachError {
    fn from(e: serde_json::Error) -> Self {
        CoachError::Serialization(e.to_string())
    }
}
