use std::sync::Arc;

use messbot::{App, BotConfig, FixedClock, MealCategory};

/// Fixed typing delay used by the app tests.
pub const TYPING_DELAY_MS: u64 = 1500;
/// Fixed feedback confirmation window used by the app tests.
pub const RESET_MS: u64 = 3000;

/// Creates an app on a manual clock with a fixed seed.
pub fn test_app() -> (Arc<FixedClock>, App) {
    test_app_with(BotConfig {
        typing_delay_ms: TYPING_DELAY_MS,
        feedback_reset_ms: RESET_MS,
        rng_seed: Some(2024),
        ..BotConfig::default()
    })
}

pub fn test_app_with(config: BotConfig) -> (Arc<FixedClock>, App) {
    let clock = Arc::new(FixedClock::default());
    let app = App::with_clock(config, clock.clone());
    (clock, app)
}

/// Pull the suggested dish out of a single-meal reply.
///
/// Replies read `Your <meal> recommendation: <dish>! ...`; dish names never
/// contain `!`.
pub fn extract_dish(reply: &str) -> Option<&str> {
    let (_, rest) = reply.split_once("recommendation: ")?;
    rest.split_once('!').map(|(dish, _)| dish)
}

/// Pull the dish out of one `<icon> <Label>: <dish>` line of the all-meals reply.
pub fn extract_line_dish(line: &str, category: MealCategory) -> Option<&str> {
    let prefix = format!("{} {}: ", category.icon(), category.label());
    line.strip_prefix(prefix.as_str())
}
