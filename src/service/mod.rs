//! Service layer: the public façade consumed by front-ends.

pub mod chat;
pub mod error;
pub mod listener;

pub use chat::ChatService;
pub use error::SendMessageError;
pub use listener::{ListenerError, ListenerId, MessageListener};
