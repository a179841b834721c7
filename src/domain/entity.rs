//! Core domain models for the chat backend.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::value_object::{ConversationId, MessageId, MessageText, Timestamp};

/// Represents a named group conversation with a mutable participant set.
///
/// A conversation with zero participants is valid. Participant names are
/// case-sensitive and deduplicated by the set. Conversations are never
/// deleted; the store owns them for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation identifier, immutable once assigned
    pub id: ConversationId,
    /// Display name, arbitrary text, not unique
    pub name: String,
    /// Participant names, unordered and unique
    pub participants: HashSet<String>,
}

impl Conversation {
    /// Create a new conversation. Duplicate participant names are collapsed.
    pub fn new(
        id: ConversationId,
        name: impl Into<String>,
        participants: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            participants: participants.into_iter().collect(),
        }
    }

    /// Add a participant. Idempotent when the name is already present.
    pub fn add_participant(&mut self, user_name: impl Into<String>) {
        self.participants.insert(user_name.into());
    }

    /// Remove a participant by name.
    pub fn remove_participant(&mut self, user_name: &str) {
        self.participants.remove(user_name);
    }

    /// Check participant membership (exact, case-sensitive match).
    pub fn has_participant(&self, user_name: &str) -> bool {
        self.participants.contains(user_name)
    }
}

impl fmt::Display for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

/// Represents an immutable chat message with reserved image attachment data.
///
/// Messages are never updated or deleted after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier, globally unique across conversations
    pub id: MessageId,
    /// Owning conversation. Foreign reference only; not enforced by the store.
    pub conversation_id: ConversationId,
    /// Sender name, free text
    pub sender_name: String,
    /// Message body, length-bounded at creation
    pub text: MessageText,
    /// Reserved attachment payload; currently never populated by the send path
    pub image_data: Option<Vec<u8>>,
    /// Wall-clock capture time
    pub timestamp: Timestamp,
}

impl Message {
    /// Create a new message without an attachment.
    pub fn new(
        id: MessageId,
        conversation_id: ConversationId,
        sender_name: impl Into<String>,
        text: MessageText,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            conversation_id,
            sender_name: sender_name.into(),
            text,
            image_data: None,
            timestamp,
        }
    }

    /// Whether this message carries an image attachment.
    pub fn has_image(&self) -> bool {
        self.image_data.is_some()
    }
}

// Identity-based equality: two messages are equal iff their ids match,
// regardless of every other field.
impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}

impl Hash for Message {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let img_indicator = if self.has_image() { " [IMAGE]" } else { "" };
        write!(f, "{}: {}{}", self.sender_name, self.text, img_indicator)
    }
}
