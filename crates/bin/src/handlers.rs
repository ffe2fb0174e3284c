use crossterm::event::{KeyCode, KeyModifiers};
use messbot::MealCategory;

use crate::screen::{ChatScreen, Focus};

pub fn handle_key_event(screen: &mut ChatScreen, key: KeyCode, modifiers: KeyModifiers) {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match key {
        KeyCode::Char('c') if ctrl => screen.should_quit = true,
        KeyCode::Char('t') if ctrl => screen.app.toggle_theme(),
        KeyCode::Esc => {
            if screen.app.weekly_menu().is_some() {
                screen.app.close_weekly_menu();
            } else {
                screen.should_quit = true;
            }
        }
        KeyCode::F(n @ 1..=4) => {
            screen.app.open_weekly_menu(MealCategory::ALL[usize::from(n - 1)]);
        }
        // The weekly menu modal swallows everything else
        _ if screen.app.weekly_menu().is_some() => {}
        KeyCode::Tab => screen.toggle_focus(),
        KeyCode::Enter => match screen.focus {
            Focus::Chat => screen.send_message(),
            Focus::Feedback => screen.submit_feedback(),
        },
        KeyCode::Left if screen.focus == Focus::Feedback => screen.nudge_rating(false),
        KeyCode::Right if screen.focus == Focus::Feedback => screen.nudge_rating(true),
        KeyCode::Up => screen.scroll_up(),
        KeyCode::Down => screen.scroll_down(),
        KeyCode::Char(c) => {
            if screen.status_message.is_some() {
                screen.clear_status_message();
            }
            screen.push_char(c);
        }
        KeyCode::Backspace => screen.pop_char(),
        _ => {}
    }
}
