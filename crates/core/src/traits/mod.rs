//! Core traits for the responder
//!
//! Seams that keep the dialogue engine free of storage, randomness and
//! transport concerns:
//!
//! ```text
//! State:
//!   - SessionStore: ConversationId → SessionState (lazy default)
//!
//! Selection:
//!   - ReplyChooser: picks one candidate out of a reply set
//!
//! Transport:
//!   - MessageGateway: delivers an outbound reply to a conversation
//! ```

mod chooser;
mod gateway;
mod session;

pub use chooser::ReplyChooser;
pub use gateway::MessageGateway;
pub use session::SessionStore;
