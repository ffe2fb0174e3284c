//! Chat command - the interactive terminal window.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use messbot::{App, BotConfig};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, trace};

use crate::handlers::handle_key_event;
use crate::screen::ChatScreen;
use crate::ui::ui;

/// Upper bound on how long the loop sleeps between input polls.
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Run the chat command
pub async fn run(config: BotConfig) -> anyhow::Result<()> {
    info!(
        typing_delay_ms = config.typing_delay_ms,
        theme = %config.theme,
        "Starting chat window"
    );
    let mut screen = ChatScreen::new(App::new(config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut screen).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    info!(messages = screen.app.session().len(), "Chat window closed");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut ChatScreen,
) -> io::Result<()> {
    loop {
        let fired = screen.app.tick();
        if fired > 0 {
            trace!(fired, "Deferred tasks fired");
        }

        terminal.draw(|f| ui(f, screen))?;

        // Handle all available events first
        let mut handled_event = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                handled_event = true;
                if key.kind == KeyEventKind::Press {
                    handle_key_event(screen, key.code, key.modifiers);
                }
            }
        }

        if screen.should_quit {
            break;
        }

        if !handled_event {
            let wait = idle_wait(screen.app.now_millis(), screen.app.next_deadline());
            tokio::time::sleep(wait).await;
        }
    }
    Ok(())
}

/// Sleep until the next deferred task is due, capped at [`IDLE_POLL`].
fn idle_wait(now_millis: u64, next_deadline: Option<u64>) -> Duration {
    next_deadline
        .map(|due| Duration::from_millis(due.saturating_sub(now_millis)))
        .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL))
}
