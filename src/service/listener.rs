//! Message listener registration types.

use std::fmt;

use crate::domain::Message;

/// Error type a listener may report back to the service.
///
/// Failures are logged and isolated by the service; they never propagate to
/// the sender or suppress delivery to later listeners.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Observer invoked synchronously on the sending caller's task for every
/// successfully stored message.
pub trait MessageListener: Send + Sync {
    /// Handle a newly stored message.
    fn on_message(&self, message: &Message) -> Result<(), ListenerError>;
}

// Plain closures work as listeners.
impl<F> MessageListener for F
where
    F: Fn(&Message) -> Result<(), ListenerError> + Send + Sync,
{
    fn on_message(&self, message: &Message) -> Result<(), ListenerError> {
        self(message)
    }
}

/// Handle returned by listener registration, used for removal.
///
/// Rust has no observer object identity to remove by, so registration hands
/// out a token instead. Registering the same listener twice yields two
/// distinct handles and two notifications per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
