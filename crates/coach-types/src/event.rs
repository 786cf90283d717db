use serde::{Deserialize, Serialize};

use crate::persona::Phase;

/// Events emitted by the session runtime.
/// The UI drains these each frame for reactive updates; rendering never
/// reaches into the session itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A user submission was accepted and is being processed
    TurnStart { turn_id: u64 },

    /// The coach produced a reply
    Reply { text: String },

    /// The advisory phase moved on
    PhaseChanged { phase: Phase },

    /// The turn finished, successfully or not
    TurnEnd { turn_id: u64 },

    /// The turn failed; the conversation keeps the user turn only
    Error { message: String },
}
