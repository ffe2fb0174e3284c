//! Constants used throughout the messbot library.
//!
//! Central definitions for the fixed bot texts and the default timings of
//! the deferred tasks.

/// First message of every chat session, authored by the assistant.
pub const WELCOME: &str = "Hello! I'm Chef Bot from Tirupati Mess! 🍽️ Ask me about our delicious meals for breakfast, lunch, snacks, or dinner!";

/// Reply to a greeting.
pub const GREETING_REPLY: &str =
    "Hello there! Welcome to Tirupati Mess! What meal would you like to know about? 😊";

/// Reply to thanks.
pub const THANKS_REPLY: &str =
    "You're welcome! Enjoy your meal at Tirupati Mess! Don't forget to rate us! ⭐";

/// Reply when no keyword group matches.
pub const FALLBACK_REPLY: &str = "I can help you with breakfast, lunch, snacks, or dinner recommendations! Just ask about any meal time! 🍽️";

/// Simulated typing delay before the assistant replies.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

/// How long the feedback confirmation stays visible before the form resets.
pub const DEFAULT_FEEDBACK_RESET_MS: u64 = 3000;

/// Highest star rating the feedback form accepts.
pub const MAX_RATING: u8 = 5;
