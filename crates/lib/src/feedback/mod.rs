//! Star-rating feedback form.
//!
//! The form collects a 1-5 star rating and a free-text suggestion. Submitting
//! shows a confirmation and locks the form; the owner schedules a reset after
//! the confirmation window, which clears both fields. Submissions are not
//! stored anywhere.

use serde::Serialize;
use tracing::info;

use crate::constants::MAX_RATING;

pub mod errors;

pub use errors::FeedbackError;

/// A submitted rating and comment, handed back to the caller once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSubmission {
    /// 0 when no star was picked.
    pub rating_stars: u8,
    pub comment: String,
}

/// Editing state of the feedback form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    rating: u8,
    comment: String,
    submitted: bool,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// True while the confirmation is showing.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Pick a star rating (1..=5).
    pub fn set_rating(&mut self, stars: u8) -> Result<(), FeedbackError> {
        self.ensure_editing()?;
        if !(1..=MAX_RATING).contains(&stars) {
            return Err(FeedbackError::InvalidRating {
                stars,
                max: MAX_RATING,
            });
        }
        self.rating = stars;
        Ok(())
    }

    /// Move the rating one star up or down, staying within 1..=5.
    pub fn nudge_rating(&mut self, up: bool) -> Result<(), FeedbackError> {
        let stars = if up {
            self.rating.saturating_add(1).min(MAX_RATING)
        } else {
            self.rating.saturating_sub(1).max(1)
        };
        self.set_rating(stars)
    }

    pub fn set_comment(&mut self, text: impl Into<String>) -> Result<(), FeedbackError> {
        self.ensure_editing()?;
        self.comment = text.into();
        Ok(())
    }

    pub fn push_char(&mut self, c: char) -> Result<(), FeedbackError> {
        self.ensure_editing()?;
        self.comment.push(c);
        Ok(())
    }

    pub fn pop_char(&mut self) -> Result<(), FeedbackError> {
        self.ensure_editing()?;
        self.comment.pop();
        Ok(())
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitted && !self.comment.trim().is_empty()
    }

    /// Submit the form and lock it until [`FeedbackForm::reset`].
    pub fn submit(&mut self) -> Result<FeedbackSubmission, FeedbackError> {
        self.ensure_editing()?;
        if self.comment.trim().is_empty() {
            return Err(FeedbackError::BlankComment);
        }
        self.submitted = true;
        info!(rating_stars = self.rating, "Feedback submitted");
        Ok(FeedbackSubmission {
            rating_stars: self.rating,
            comment: self.comment.clone(),
        })
    }

    /// Clear rating and comment and unlock the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn ensure_editing(&self) -> Result<(), FeedbackError> {
        if self.submitted {
            Err(FeedbackError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }
}
