//! Transcript model for the chat widget.
//!
//! The transcript is owned and mutated by the widget layer exclusively;
//! the reply engine never reads it, so conversations carry no memory
//! across turns.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Origin of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// One turn in the conversation: who said it, what, and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub origin: Origin,
    pub text: String,
    /// Epoch seconds at which the turn was appended.
    pub created_at: i64,
}

/// Ordered sequence of turns for one widget session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<TranscriptTurn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Origin::User, text.into());
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Origin::Assistant, text.into());
    }

    fn push(&mut self, origin: Origin, text: String) {
        self.turns.push(TranscriptTurn {
            origin,
            text,
            created_at: Local::now().timestamp(),
        });
    }

    /// All turns in insertion order.
    pub fn turns(&self) -> &[TranscriptTurn] {
        &self.turns
    }

    /// The most recently appended turn.
    pub fn last(&self) -> Option<&TranscriptTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
