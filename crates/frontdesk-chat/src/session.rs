//! Chat session: the widget-side boundary around a [`Responder`].
//!
//! Owns the transcript, applies the input guards, and models the cosmetic
//! "thinking" delay before a reply is appended. One session corresponds to
//! one open widget; nothing is persisted across sessions.

use chrono::Local;
use tokio::time::Duration;
use uuid::Uuid;

use frontdesk_core::config::ChatConfig;

use crate::error::ChatError;
use crate::responder::Responder;
use crate::transcript::Transcript;

/// Opening assistant message seeded into every new transcript.
const OPENING_MESSAGE: &str = "Hi! I'm Nexstar's AI Assistant. Ask me anything about our website, services, or how to get in touch.";

/// One widget session: a responder plus the transcript it feeds.
pub struct ChatSession<R: Responder> {
    /// Session identifier.
    pub id: Uuid,
    /// Epoch seconds at which the session was opened.
    pub started_at: i64,
    responder: R,
    transcript: Transcript,
    config: ChatConfig,
}

impl<R: Responder> ChatSession<R> {
    /// Open a new session, seeding the transcript with the opening
    /// assistant message.
    pub fn new(responder: R, config: ChatConfig) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_assistant(OPENING_MESSAGE);

        Self {
            id: Uuid::new_v4(),
            started_at: Local::now().timestamp(),
            responder,
            transcript,
            config,
        }
    }

    /// Submit one user utterance and return the assistant reply.
    ///
    /// Empty and whitespace-only input is rejected before anything is
    /// appended to the transcript ("do not submit" rather than an engine
    /// error). On success the transcript gains a `user` turn followed by
    /// an `assistant` turn.
    pub async fn submit(&mut self, input: &str) -> Result<String, ChatError> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }

        let utterance = input.trim();
        if utterance.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if utterance.len() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        self.transcript.push_user(utterance);

        // Cosmetic only: the engine computes nothing during this wait.
        if self.config.thinking_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.thinking_delay_ms)).await;
        }

        let reply = self.responder.respond(utterance).await?;
        self.transcript.push_assistant(reply.clone());

        tracing::debug!(
            session = %self.id,
            turns = self.transcript.len(),
            "Turn completed"
        );

        Ok(reply)
    }

    /// The transcript owned by this session.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The opening assistant message every session starts with.
    pub fn opening_message() -> &'static str {
        OPENING_MESSAGE
    }
}

// =============================================================================
// Tests
// =============================================================================
