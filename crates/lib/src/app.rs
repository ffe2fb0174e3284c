//! Application view-model.
//!
//! [`App`] is the single owner of every piece of mutable state the front end
//! displays: the chat log, the feedback form, the theme and the open weekly
//! menu. Input handlers take `&mut App`; the event loop calls [`App::tick`]
//! to fire deferred work (Chef Bot's delayed replies and the feedback reset).

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use crate::{
    Result,
    clock::{Clock, SystemClock},
    config::BotConfig,
    dispatcher::Dispatcher,
    feedback::{FeedbackForm, FeedbackSubmission},
    menu::{MealCategory, MenuCatalog, WeeklyMenuCatalog},
    session::ChatSession,
    theme::Theme,
    timers::Timers,
};

/// Work scheduled for later by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Append Chef Bot's reply to this user text.
    Reply { text: String },
    /// Clear the feedback form after its confirmation window.
    ResetFeedback,
}

/// State container for one front-end session.
#[derive(Debug)]
pub struct App {
    config: BotConfig,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    dispatcher: Dispatcher,
    weekly: WeeklyMenuCatalog,
    session: ChatSession,
    feedback: FeedbackForm,
    theme: Theme,
    weekly_menu: Option<MealCategory>,
    timers: Timers<Deferred>,
}

impl App {
    /// Create an app on the system clock with the built-in catalogs.
    pub fn new(config: BotConfig) -> Self {
        Self::build(config, Arc::new(SystemClock))
    }

    /// Create an app on a caller-provided clock.
    #[cfg(any(test, feature = "testing"))]
    pub fn with_clock(config: BotConfig, clock: Arc<dyn Clock>) -> Self {
        Self::build(config, clock)
    }

    fn build(config: BotConfig, clock: Arc<dyn Clock>) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            theme: config.theme,
            rng,
            dispatcher: Dispatcher::new(MenuCatalog::builtin()),
            weekly: WeeklyMenuCatalog::builtin(),
            session: ChatSession::new(clock.clone()),
            feedback: FeedbackForm::new(),
            weekly_menu: None,
            timers: Timers::new(),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn menu(&self) -> &MenuCatalog {
        self.dispatcher.menu()
    }

    pub fn weekly_catalog(&self) -> &WeeklyMenuCatalog {
        &self.weekly
    }

    // ===== Chat =====

    /// Append the user's message and queue Chef Bot's reply.
    ///
    /// Returns the sequence id of the user message. Every call queues its own
    /// reply; earlier pending replies are left alone. With a zero typing delay
    /// the reply is appended before returning.
    pub fn submit_chat(&mut self, text: &str) -> Result<u64> {
        let id = self.session.push_user(text)?.sequence_id();
        let delay = self.config.typing_delay();
        if delay.is_zero() {
            self.reply(text);
        } else {
            let handle = self.timers.schedule(
                self.clock.now_millis(),
                delay,
                Deferred::Reply {
                    text: text.to_string(),
                },
            );
            trace!(due = handle.due_millis(), "Scheduled reply");
        }
        Ok(id)
    }

    /// One-off reply outside the chat log.
    pub fn ask(&mut self, text: &str) -> String {
        self.dispatcher.respond_with(text, &mut self.rng)
    }

    /// True while at least one reply is pending.
    pub fn is_typing(&self) -> bool {
        self.timers
            .count_where(|t| matches!(t, Deferred::Reply { .. }))
            > 0
    }

    fn reply(&mut self, text: &str) {
        let reply = self.dispatcher.respond_with(text, &mut self.rng);
        self.session.push_assistant(reply);
    }

    // ===== Feedback =====

    pub fn feedback(&self) -> &FeedbackForm {
        &self.feedback
    }

    pub fn set_rating(&mut self, stars: u8) -> Result<()> {
        Ok(self.feedback.set_rating(stars)?)
    }

    pub fn nudge_rating(&mut self, up: bool) -> Result<()> {
        Ok(self.feedback.nudge_rating(up)?)
    }

    pub fn set_comment(&mut self, text: impl Into<String>) -> Result<()> {
        Ok(self.feedback.set_comment(text)?)
    }

    pub fn push_feedback_char(&mut self, c: char) -> Result<()> {
        Ok(self.feedback.push_char(c)?)
    }

    pub fn pop_feedback_char(&mut self) -> Result<()> {
        Ok(self.feedback.pop_char()?)
    }

    /// Submit the feedback form and schedule its reset.
    pub fn submit_feedback(&mut self) -> Result<FeedbackSubmission> {
        let submission = self.feedback.submit()?;
        self.timers.schedule(
            self.clock.now_millis(),
            self.config.feedback_reset(),
            Deferred::ResetFeedback,
        );
        Ok(submission)
    }

    // ===== Weekly menu modal =====

    pub fn open_weekly_menu(&mut self, category: MealCategory) {
        debug!(%category, "Opening weekly menu");
        self.weekly_menu = Some(category);
    }

    pub fn close_weekly_menu(&mut self) {
        self.weekly_menu = None;
    }

    /// Category of the open weekly menu, if any.
    pub fn weekly_menu(&self) -> Option<MealCategory> {
        self.weekly_menu
    }

    // ===== Theme =====

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        debug!(theme = %self.theme, "Theme toggled");
    }

    // ===== Deferred work =====

    /// Fire every deferred task that is due. Returns how many ran.
    pub fn tick(&mut self) -> usize {
        let due = self.timers.take_due(self.clock.now_millis());
        let fired = due.len();
        for task in due {
            trace!(?task, "Firing deferred task");
            match task {
                Deferred::Reply { text } => self.reply(&text),
                Deferred::ResetFeedback => {
                    self.feedback.reset();
                    info!("Feedback form reset");
                }
            }
        }
        fired
    }

    /// Current time on the app's clock, comparable with [`App::next_deadline`].
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Earliest pending deadline in epoch milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }
}
