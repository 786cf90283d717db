//! Append-only conversation store.
//!
//! One session owns one `Conversation`. Turns are never reordered or
//! removed; the log only grows. The persona instruction is injected per
//! request by the prompt assembler and must never appear here.

use coach_types::message::{Message, Role};

#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn. There is no removal operation.
    pub fn append(&mut self, turn: Message) {
        // system turns belong to the request, not the visible log
        debug_assert!(turn.role != Role::System);
        self.turns.push(turn);
    }

    /// Ordered view of all turns. Restartable: re-reading does not mutate.
    pub fn all(&self) -> std::slice::Iter<'_, Message> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.turns.last()
    }
}
