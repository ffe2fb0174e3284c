//! Chat session error types.

use thiserror::Error;

/// Errors that can occur while appending to a chat session.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// User submitted empty or whitespace-only text.
    #[error("Message text is empty")]
    EmptyMessage,
}

impl SessionError {
    /// Check if this error rejects user input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SessionError::EmptyMessage)
    }
}

impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
