//! Conversational engine for the Frontdesk site assistant.
//!
//! Provides the rule-based reply engine, the transcript model, and the
//! chat session boundary that front-end widgets call into.

pub mod engine;
pub mod error;
pub mod responder;
pub mod rules;
pub mod session;
pub mod transcript;

pub use engine::ReplyEngine;
pub use error::ChatError;
pub use responder::Responder;
pub use rules::{Predicate, Rule, RuleSet, Topic};
pub use session::ChatSession;
pub use transcript::{Origin, Transcript, TranscriptTurn};
