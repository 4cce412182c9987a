//! Outbound side of the messaging gateway

use async_trait::async_trait;

use crate::conversation::ConversationId;
use crate::Result;

/// Delivers replies to the chat network
///
/// Fire-and-forget from the engine's perspective: a delivery error is logged by
/// the caller and never feeds back into dialogue state.
#[async_trait]
pub trait MessageGateway: Send + Sync + 'static {
    /// Send `text` to the conversation
    async fn send_reply(&self, conversation_id: &ConversationId, text: &str) -> Result<()>;

    /// Gateway name for logging
    fn name(&self) -> &str;
}
