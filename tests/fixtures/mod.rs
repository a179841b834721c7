//! Shared test fixtures for integration tests.

use std::sync::Mutex;

use banter::{ChatService, ListenerError, Message, MessageListener};

/// Build a fresh service over in-memory stores.
pub fn service() -> ChatService {
    ChatService::in_memory()
}

/// Listener that records every delivered message.
#[derive(Default)]
pub struct RecordingListener {
    received: Mutex<Vec<Message>>,
}

impl RecordingListener {
    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }
}

impl MessageListener for RecordingListener {
    fn on_message(&self, message: &Message) -> Result<(), ListenerError> {
        self.received.lock().unwrap().push(message.clone());
        Ok(())
    }
}
