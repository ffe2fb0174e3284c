mod cli;
mod commands;
mod handlers;
mod output;
mod screen;
mod ui;

use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Chat));
    init_tracing(&cli, interactive)?;

    let config = cli
        .settings
        .load()
        .context("Failed to load configuration")?;

    match &cli.command {
        None | Some(Commands::Chat) => commands::chat::run(config).await,
        Some(Commands::Ask(args)) => commands::ask::run(args, config),
        Some(Commands::Menu(args)) => commands::menu::run(args),
        Some(Commands::Dishes(args)) => commands::dishes::run(args),
    }
}

/// Initialize tracing.
///
/// The chat window owns the terminal, so it only logs when `--log-file` is
/// given. One-shot commands log to stderr.
fn init_tracing(cli: &Cli, interactive: bool) -> anyhow::Result<()> {
    let directive = if cli.verbose {
        "messbot=debug"
    } else {
        "messbot=info"
    };
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    match &cli.log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
