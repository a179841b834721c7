//! In-memory chat backend library.
//!
//! Provides conversation and message storage behind repository seams, a
//! `ChatService` façade with participant management, and a listener
//! mechanism delivering new messages to registered observers.

pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod service;
pub mod time;

// Re-export the public surface
pub use domain::{Conversation, ConversationId, Message, MessageId, MessageText, Timestamp};
pub use infrastructure::{InMemoryConversationRepository, InMemoryMessageRepository};
pub use service::{ChatService, ListenerError, ListenerId, MessageListener, SendMessageError};
