//! Domain layer for the chat backend.
//!
//! This module contains business logic that is independent of
//! infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Conversation, Message};
pub use error::ValueObjectError;
pub use repository::{ConversationRepository, MessageRepository};
pub use value_object::{ConversationId, MAX_MESSAGE_CHARS, MessageId, MessageText, Timestamp};

#[cfg(test)]
pub use repository::{MockConversationRepository, MockMessageRepository};
