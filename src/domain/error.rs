//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,
}
