//! Repository traits for the domain layer.
//!
//! The traits are the seam between business logic and storage: the service
//! depends on these abstractions, never on a concrete store, so a persistent
//! implementation can be substituted without touching the service layer
//! (dependency inversion).

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{
    entity::{Conversation, Message},
    value_object::{ConversationId, MessageText},
};

/// Storage abstraction for conversations.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Create a conversation with the next identifier and the given initial
    /// participant set (duplicates collapsed). Always succeeds.
    async fn create(&self, name: &str, participants: &[String]) -> Conversation;

    /// Look up a conversation by id. Absence is a normal outcome, not an error.
    async fn find_by_id(&self, id: ConversationId) -> Option<Conversation>;

    /// All conversations, in unspecified order.
    async fn find_all(&self) -> Vec<Conversation>;

    /// All conversations whose participant set contains an exact match of
    /// `user_name`.
    async fn find_by_participant(&self, user_name: &str) -> Vec<Conversation>;

    /// Add a participant to an existing conversation. Returns `false` when
    /// the conversation does not exist; idempotent when already a member.
    async fn add_participant(&self, id: ConversationId, user_name: &str) -> bool;
}

/// Storage abstraction for messages.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Store a new message with the next globally-unique identifier and the
    /// current timestamp. Does not validate that the conversation exists.
    async fn create(
        &self,
        conversation_id: ConversationId,
        sender_name: &str,
        text: MessageText,
    ) -> Message;

    /// Snapshot of a conversation's messages in insertion order; empty when
    /// the conversation has none (or is unknown).
    async fn find_by_conversation(&self, conversation_id: ConversationId) -> Vec<Message>;

    /// Pre-register an empty message list for a conversation so a brand-new
    /// conversation reports empty rather than missing. A persistent store may
    /// treat this as a no-op.
    async fn init_conversation(&self, conversation_id: ConversationId);
}
