//! Backend seam for reply generation.
//!
//! The widget layer talks to whatever produces replies through this trait,
//! so the rule-based [`ReplyEngine`](crate::engine::ReplyEngine) can later
//! be swapped for a remote-inference backend without touching the caller
//! contract: same input shape (one utterance), same output shape (one
//! reply string).

use async_trait::async_trait;

use crate::error::ChatError;

/// Produces one reply for one user utterance.
///
/// Implementations backed by a network service may fail with
/// [`ChatError::Backend`]; the built-in rule engine never does.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce the reply for the given utterance.
    async fn respond(&self, utterance: &str) -> Result<String, ChatError>;
}
