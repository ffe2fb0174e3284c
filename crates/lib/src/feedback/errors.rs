//! Feedback form error types.

use thiserror::Error;

/// Errors that can occur while editing or submitting the feedback form.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    /// Star rating outside 1..=5.
    #[error("Rating must be between 1 and {max} stars, got {stars}")]
    InvalidRating {
        /// The rejected value
        stars: u8,
        /// Highest accepted value
        max: u8,
    },

    /// Submission attempted with an empty comment.
    #[error("Suggestion text is empty")]
    BlankComment,

    /// The confirmation is still showing; the form is locked until it resets.
    #[error("Feedback already submitted")]
    AlreadySubmitted,
}

impl FeedbackError {
    /// Check if this error rejects user input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FeedbackError::InvalidRating { .. } | FeedbackError::BlankComment
        )
    }
}

impl From<FeedbackError> for crate::Error {
    fn from(err: FeedbackError) -> Self {
        crate::Error::Feedback(err)
    }
}
