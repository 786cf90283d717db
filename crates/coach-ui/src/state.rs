//! UI-level state that drives rendering.
//! This is a read-only projection of the session runtime state,
//! updated each frame by draining the EventBus.

use coach_core::session::SessionStatus;
use coach_types::event::SessionEvent;
use coach_types::message::{Message, Role};
use coach_types::persona::Phase;

/// State visible to UI panels
pub struct UiState {
    /// Displayed transcript (seed greetings + user + coach + errors)
    pub transcript: Vec<ChatEntry>,
    /// Current session status
    pub session_status: SessionStatus,
    /// Advisory phase, mirrored from PhaseChanged events
    pub phase: Phase,
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
}

/// A transcript entry for display
#[derive(Clone)]
pub struct ChatEntry {
    pub role: String,
    pub text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            session_status: SessionStatus::AwaitingInput,
            phase: Phase::Evaluation,
            input_text: String::new(),
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::TurnStart { .. } => {
                    self.session_status = SessionStatus::Submitting;
                    self.status_text = "Waiting for coach...".to_string();
                }
                SessionEvent::Reply { text } => {
                    self.transcript.push(ChatEntry {
                        role: "assistant".to_string(),
                        text,
                    });
                }
                SessionEvent::PhaseChanged { phase } => {
                    self.phase = phase;
                }
                SessionEvent::TurnEnd { .. } => {
                    if self.session_status == SessionStatus::Submitting {
                        self.session_status = SessionStatus::AwaitingInput;
                        self.status_text = "Ready".to_string();
                    }
                }
                SessionEvent::Error { message } => {
                    log::warn!("turn failed: {}", message);
                    self.session_status = SessionStatus::Failed(message.clone());
                    self.status_text = format!("Error: {}", message);
                    self.transcript.push(ChatEntry {
                        role: "error".to_string(),
                        text: message,
                    });
                }
            }
        }
    }

    /// Seed the transcript from an existing conversation view
    pub fn seed_transcript<'a>(&mut self, turns: impl IntoIterator<Item = &'a Message>) {
        for turn in turns {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
                Role::System => continue,
            };
            self.transcript.push(ChatEntry {
                role: role.to_string(),
                text: turn.text.clone(),
            });
        }
    }

    /// Add a user message to the display
    pub fn push_user_message(&mut self, text: &str) {
        self.transcript.push(ChatEntry {
            role: "user".to_string(),
            text: text.to_string(),
        });
    }

    pub fn is_busy(&self) -> bool {
        self.session_status == SessionStatus::Submitting
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
