//! Core traits and types for the responder
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions and script-based detection
//! - Intent categories
//! - Conversation identifiers and per-conversation dialogue state
//! - Traits for pluggable session storage, reply selection and delivery
//! - Error types

pub mod conversation;
pub mod error;
pub mod intent;
pub mod language;
pub mod traits;

pub use conversation::{ConversationId, DialogueState, SessionState};
pub use error::{Error, Result};
pub use intent::IntentCategory;
pub use language::{Language, Script};

pub use traits::{MessageGateway, ReplyChooser, SessionStore};
