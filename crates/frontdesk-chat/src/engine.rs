//! The deterministic reply engine.
//!
//! Maps one utterance to exactly one reply using the fixed [`RuleSet`].
//! Holds no state across calls; the transcript belongs to the caller.

use async_trait::async_trait;

use crate::error::ChatError;
use crate::responder::Responder;
use crate::rules::RuleSet;

/// Rule-based reply engine.
///
/// `reply` is a total, pure function of the utterance and the rule table:
/// it always returns a non-empty string and never fails.
#[derive(Debug, Clone, Default)]
pub struct ReplyEngine {
    rules: RuleSet,
}

impl ReplyEngine {
    /// Create an engine with the default rule table.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    /// Create an engine with a custom rule table.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Resolve the reply for one utterance.
    pub fn reply(&self, utterance: &str) -> String {
        let reply = self.rules.reply_for(utterance);
        tracing::debug!(utterance_len = utterance.len(), "Reply resolved");
        reply.to_string()
    }

    /// The rule table backing this engine.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

#[async_trait]
impl Responder for ReplyEngine {
    /// Infallible: the rule table always yields a reply.
    async fn respond(&self, utterance: &str) -> Result<String, ChatError> {
        Ok(self.reply(utterance))
    }
}

// =============================================================================
// Tests
// =============================================================================
