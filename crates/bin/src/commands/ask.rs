//! Ask command - one Chef Bot reply, printed to stdout.

use messbot::{App, BotConfig};

use crate::cli::AskArgs;

/// Run the ask command
pub fn run(args: &AskArgs, config: BotConfig) -> anyhow::Result<()> {
    println!("{}", reply(args, config));
    Ok(())
}

fn reply(args: &AskArgs, config: BotConfig) -> String {
    App::new(config).ask(&args.text.join(" "))
}
