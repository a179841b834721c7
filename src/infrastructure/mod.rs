//! Infrastructure layer: concrete storage implementations.

pub mod repository;

pub use repository::{InMemoryConversationRepository, InMemoryMessageRepository};
