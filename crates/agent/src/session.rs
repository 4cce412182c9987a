//! Session state storage
//!
//! - `InMemorySessionStore` - process-lifetime map, no expiry
//! - `ConversationLocks` - one mutex per conversation so a read-modify-write of
//!   its state cannot interleave with another message from the same sender

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use responder_core::{ConversationId, SessionState, SessionStore};

/// In-memory session store (default)
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<ConversationId, SessionState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &ConversationId) -> SessionState {
        if let Some(state) = self.sessions.read().get(id) {
            return *state;
        }
        *self.sessions.write().entry(id.clone()).or_default()
    }

    fn set(&self, id: &ConversationId, state: SessionState) {
        self.sessions.write().insert(id.clone(), state);
    }

    fn len(&self) -> usize {
        self.sessions.read().len()
    }
}

/// Per-conversation mutexes
///
/// Entries live as long as the process, like the session records they guard.
#[derive(Debug, Default)]
pub struct ConversationLocks {
    locks: RwLock<HashMap<ConversationId, Arc<Mutex<()>>>>,
}

impl ConversationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex guarding `id`, created on first use
    pub fn lock_for(&self, id: &ConversationId) -> Arc<Mutex<()>> {
        if let Some(lock) = self.locks.read().get(id) {
            return Arc::clone(lock);
        }
        Arc::clone(self.locks.write().entry(id.clone()).or_default())
    }

    pub fn len(&self) -> usize {
        self.locks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
