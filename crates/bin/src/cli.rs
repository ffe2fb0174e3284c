//! CLI argument definitions for the messbot binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use messbot::{BotConfig, MealCategory, Theme, Weekday, config::ConfigError};

/// Chef Bot, the Tirupati Mess dining assistant
#[derive(Parser, Debug)]
#[command(name = "messbot")]
#[command(about = "Chef Bot: meal suggestions and weekly menus for the Tirupati Mess")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file. The chat window logs nowhere without it.
    #[arg(long, global = true, env = "MESSBOT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the chat window (default)
    Chat,
    /// Print one Chef Bot reply and exit
    Ask(AskArgs),
    /// Print the weekly menu of a meal category
    Menu(MenuArgs),
    /// List the dishes Chef Bot suggests from
    Dishes(DishesArgs),
}

/// Settings layered over the optional config file
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// JSON config file. Missing files fall back to defaults.
    #[arg(short, long, global = true, env = "MESSBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Delay before Chef Bot replies, in milliseconds
    #[arg(long, global = true, env = "MESSBOT_TYPING_DELAY_MS")]
    pub typing_delay_ms: Option<u64>,

    /// How long the feedback confirmation shows, in milliseconds
    #[arg(long, global = true, env = "MESSBOT_FEEDBACK_RESET_MS")]
    pub feedback_reset_ms: Option<u64>,

    /// Starting theme (light or dark)
    #[arg(long, global = true, env = "MESSBOT_THEME")]
    pub theme: Option<Theme>,

    /// Seed for dish suggestions, for reproducible replies
    #[arg(long, global = true, env = "MESSBOT_SEED")]
    pub seed: Option<u64>,
}

impl SettingsArgs {
    /// Load the config file (if any) and apply flag overrides.
    pub fn load(&self) -> Result<BotConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => BotConfig::load_from_file(path)?,
            None => BotConfig::default(),
        };
        if let Some(ms) = self.typing_delay_ms {
            config.typing_delay_ms = ms;
        }
        if let Some(ms) = self.feedback_reset_ms {
            config.feedback_reset_ms = ms;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
        Ok(config)
    }
}

/// Arguments for the ask command
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// What to ask Chef Bot, e.g. "what's for lunch"
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// Arguments for the menu command
#[derive(clap::Args, Debug)]
pub struct MenuArgs {
    /// Meal category: breakfast, lunch, snacks or dinner
    pub category: MealCategory,

    /// Show a single day instead of the whole week
    #[arg(short, long)]
    pub day: Option<Weekday>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the dishes command
#[derive(clap::Args, Debug)]
pub struct DishesArgs {
    /// Only list this category
    pub category: Option<MealCategory>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}
