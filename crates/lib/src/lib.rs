//!
//! Messbot: Chef Bot, the dining-hall assistant of the Tirupati Mess.
//! This library provides the catalogs, the suggestion dispatcher and the
//! session state behind the terminal front end.
//!
//! ## Core Concepts
//!
//! * **Catalogs (`menu::MenuCatalog`, `menu::WeeklyMenuCatalog`)**: Compiled-in, read-only tables of dishes per meal category, and per category and weekday.
//! * **Dispatcher (`dispatcher::Dispatcher`)**: Classifies free text against an ordered keyword table and renders a canned reply, drawing dishes at random.
//! * **Chat session (`session::ChatSession`)**: Append-only message log of one chat window.
//! * **Feedback form (`feedback::FeedbackForm`)**: Star rating and suggestion text, cleared after a confirmation window.
//! * **Deferred tasks (`timers::Timers`)**: One-shot tasks fired by the owner's event loop against a [`Clock`].
//! * **App (`app::App`)**: The single state container the front end mutates.

pub mod app;
pub mod clock;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod feedback;
pub mod menu;
pub mod session;
pub mod theme;
pub mod timers;

pub use app::App;
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use config::BotConfig;
pub use dispatcher::Dispatcher;
pub use menu::{DishList, MealCategory, MenuCatalog, Weekday, WeeklyMenuCatalog};
pub use theme::Theme;

/// Result type used throughout the messbot library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the messbot library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured catalog errors from the menu module
    #[error(transparent)]
    Menu(menu::MenuError),

    /// Structured chat errors from the session module
    #[error(transparent)]
    Session(session::SessionError),

    /// Structured form errors from the feedback module
    #[error(transparent)]
    Feedback(feedback::FeedbackError),

    /// Configuration loading errors
    #[error(transparent)]
    Config(config::ConfigError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Menu(_) => "menu",
            Error::Session(_) => "session",
            Error::Feedback(_) => "feedback",
            Error::Config(_) => "config",
        }
    }

    /// Check if this error names a category or day outside the fixed enumerations.
    pub fn is_unknown_name(&self) -> bool {
        match self {
            Error::Menu(menu_err) => menu_err.is_unknown_name(),
            _ => false,
        }
    }

    /// Check if this error rejects user input (blank text, bad rating).
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_invalid_input(),
            Error::Feedback(feedback_err) => feedback_err.is_invalid_input(),
            _ => false,
        }
    }

    /// Check if this error is configuration-related.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
