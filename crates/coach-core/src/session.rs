//! Session runtime — one conversation, one turn at a time.
//!
//! Each submission runs the full cycle before the next is accepted:
//! assemble the request from persona + history + new input, record the
//! user turn, call the completion port, record the reply. On failure the
//! user turn stays in the log and no assistant turn is appended; the
//! session returns to an input-accepting state so the user can retry.

use coach_types::config::CoachConfig;
use coach_types::event::SessionEvent;
use coach_types::message::Message;
use coach_types::persona::{Phase, GREETING, OPENING_QUESTION};
use coach_types::Result;

use crate::conversation::Conversation;
use crate::event_bus::EventBus;
use crate::ports::CompletionPort;
use crate::prompt;

/// Session status, driven by the submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Ready for the next user turn
    AwaitingInput,
    /// A turn is in flight; submission is blocked
    Submitting,
    /// The last turn failed; input is still accepted (retry by resubmitting)
    Failed(String),
}

/// The per-session state: conversation log, persona config and advisory
/// phase. Lifecycle = session start to session end; nothing survives a
/// page reload.
pub struct Session {
    config: CoachConfig,
    conversation: Conversation,
    pub phase: Phase,
    pub status: SessionStatus,
    event_bus: EventBus,
    started_at: String,
    turn_counter: u64,
}

impl Session {
    /// Start a session: empty log seeded with the coach's introduction
    /// and opening question.
    pub fn new(config: CoachConfig, event_bus: EventBus) -> Self {
        let mut conversation = Conversation::new();
        conversation.append(Message::assistant(GREETING));
        conversation.append(Message::assistant(OPENING_QUESTION));

        let started_at = chrono::Utc::now().to_rfc3339();
        log::info!("session started at {}", started_at);

        Self {
            config,
            conversation,
            phase: Phase::Evaluation,
            status: SessionStatus::AwaitingInput,
            event_bus,
            started_at,
            turn_counter: 0,
        }
    }

    pub fn config(&self) -> &CoachConfig {
        &self.config
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    pub fn is_busy(&self) -> bool {
        self.status == SessionStatus::Submitting
    }

    /// Process one user submission end to end.
    ///
    /// Async and must be spawned via `wasm_bindgen_futures::spawn_local`;
    /// it does not block the UI thread. The request is assembled from the
    /// history as it was before this submission, so the new input appears
    /// exactly once.
    pub async fn submit(&mut self, input: &str, llm: &dyn CompletionPort) -> Result<()> {
        let input = input.trim();
        if input.is_empty() || self.is_busy() {
            return Ok(());
        }

        self.turn_counter += 1;
        let turn_id = self.turn_counter;
        self.status = SessionStatus::Submitting;
        self.event_bus.emit(SessionEvent::TurnStart { turn_id });

        let request = prompt::assemble(
            &self.config.persona,
            self.conversation.all(),
            input,
            &self.config.llm,
        );
        self.conversation.append(Message::user(input));

        match llm.complete(request).await {
            Ok(response) => {
                if let Some(usage) = &response.usage {
                    log::debug!(
                        "turn {}: {} prompt + {} completion tokens",
                        turn_id,
                        usage.prompt_tokens,
                        usage.completion_tokens
                    );
                }
                self.conversation.append(Message::assistant(&response.text));
                if self.phase == Phase::Evaluation {
                    self.phase = Phase::Planning;
                    self.event_bus
                        .emit(SessionEvent::PhaseChanged { phase: self.phase });
                }
                self.status = SessionStatus::AwaitingInput;
                self.event_bus.emit(SessionEvent::Reply {
                    text: response.text,
                });
                self.event_bus.emit(SessionEvent::TurnEnd { turn_id });
                Ok(())
            }
            Err(e) => {
                // user turn stays; no partial assistant turn
                log::warn!("turn {} failed: {}", turn_id, e);
                self.status = SessionStatus::Failed(e.to_string());
                self.event_bus.emit(SessionEvent::Error {
                    message: e.to_string(),
                });
                self.event_bus.emit(SessionEvent::TurnEnd { turn_id });
                Err(e)
            }
        }
    }
}
