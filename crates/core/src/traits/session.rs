//! Session state storage

use crate::conversation::{ConversationId, SessionState};

/// Mapping from conversation to its dialogue state
///
/// Implementations:
/// - `InMemorySessionStore` - process-lifetime map, no expiry
///
/// Neither operation can fail: a missing record is not an error, it is
/// default-constructed and persisted on first access.
pub trait SessionStore: Send + Sync + 'static {
    /// Get the state for a conversation, creating `SessionState::default()`
    /// if none exists yet
    fn get(&self, id: &ConversationId) -> SessionState;

    /// Replace the state for a conversation
    fn set(&self, id: &ConversationId, state: SessionState);

    /// Number of known conversations
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
