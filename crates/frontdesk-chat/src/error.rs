//! Error types for the chat widget boundary.
//!
//! The reply engine itself is total and has no error path; these errors
//! exist only at the session layer (input guards, disabled widget) and
//! for remote [`Responder`](crate::responder::Responder) backends.

/// Errors surfaced to the widget by the session layer.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("backend error: {0}")]
    Backend(String),
}
