//! Rule-based dialogue engine
//!
//! Features:
//! - Keyword intent matching per language
//! - Response catalog with injected reply selection
//! - Per-conversation pending-flow state
//! - Ordered transition table with first-match-wins dispatch

pub mod catalog;
pub mod chooser;
pub mod dialogue;
pub mod intent;
pub mod session;

pub use catalog::{ReplyKey, ResponseCatalog};
pub use chooser::{FixedChooser, RandomChooser, SeededChooser};
pub use dialogue::{
    DialogueEngine, Expect, Guard, NextState, Reply, Rule, FALLBACK_RULE, TRANSITION_TABLE,
};
pub use intent::IntentMatcher;
pub use session::{ConversationLocks, InMemorySessionStore};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid domain configuration: {0}")]
    InvalidDomain(String),

    #[error("Configuration error: {0}")]
    Config(#[from] responder_config::ConfigError),
}

impl From<AgentError> for responder_core::Error {
    fn from(err: AgentError) -> Self {
        responder_core::Error::Config(err.to_string())
    }
}
