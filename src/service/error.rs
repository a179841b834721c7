//! Service layer error definitions.

use thiserror::Error;

use crate::domain::ConversationId;

/// Errors returned by `ChatService::send_message`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// The target conversation does not exist
    #[error("conversation {0} not found")]
    ConversationNotFound(ConversationId),

    /// Empty message bodies are rejected rather than sliced out of range
    #[error("message text cannot be empty")]
    EmptyText,
}
