//! Conversation types: identifiers, dialogue states and per-sender session state

use serde::{Deserialize, Serialize};

/// Stable identifier of the remote party of a chat (e.g. a sender handle)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ConversationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ConversationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ConversationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pending multi-turn flow of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// No question outstanding
    #[default]
    Idle,
    /// We asked "how about you?" and wait for a positive answer
    AwaitingWellbeingFollowup,
    /// We asked whether the user wants the service details
    AwaitingServiceConfirmation,
}

impl DialogueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingWellbeingFollowup => "awaiting_wellbeing_followup",
            Self::AwaitingServiceConfirmation => "awaiting_service_confirmation",
        }
    }

    /// Whether a flow is in progress
    pub fn is_pending(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl std::fmt::Display for DialogueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-conversation record kept by the session store.
///
/// Created lazily on first contact and never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// At most one flow is pending at a time
    #[serde(default)]
    pub pending_question: DialogueState,
}

impl SessionState {
    pub fn new(pending_question: DialogueState) -> Self {
        Self { pending_question }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_idle() {
        let state = SessionState::default();
        assert_eq!(state.pending_question, DialogueState::Idle);
        assert!(!state.pending_question.is_pending());
    }

    #[test]
    fn test_conversation_id() {
        let id = ConversationId::from("94771234567@c.us");
        assert_eq!(id.as_str(), "94771234567@c.us");
        assert_eq!(id.to_string(), "94771234567@c.us");
        assert!(!id.is_empty());
        assert!(ConversationId::new("").is_empty());
    }

    #[test]
    fn test_session_state_serde() {
        let state = SessionState::new(DialogueState::AwaitingServiceConfirmation);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"pending_question":"awaiting_service_confirmation"}"#);

        let parsed: SessionState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SessionState::default());
    }
}
