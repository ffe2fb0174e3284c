//! App view-model driven by a FixedClock.

use messbot::{
    BotConfig, Error, MealCategory, Theme,
    constants::{GREETING_REPLY, THANKS_REPLY, WELCOME},
    feedback::FeedbackError,
    session::Origin,
};

use crate::helpers::{RESET_MS, TYPING_DELAY_MS, extract_dish, test_app, test_app_with};

#[test]
fn test_session_starts_with_welcome() {
    let (_clock, app) = test_app();
    let messages = app.session().messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text(), WELCOME);
    assert_eq!(messages[0].origin(), Origin::Assistant);
}

#[test]
fn test_each_submission_gets_its_own_reply() {
    let (clock, mut app) = test_app();

    app.submit_chat("hi").unwrap();
    clock.advance(500);
    app.submit_chat("thanks").unwrap();
    clock.advance(500);
    app.submit_chat("lunch").unwrap();
    assert_eq!(app.pending_tasks(), 3);
    assert!(app.is_typing());

    // First reply is due 1500ms after the first submission.
    clock.advance(TYPING_DELAY_MS - 1000);
    assert_eq!(app.tick(), 1);
    assert!(app.is_typing());

    clock.advance(1000);
    assert_eq!(app.tick(), 2);
    assert!(!app.is_typing());

    let texts: Vec<_> = app
        .session()
        .messages()
        .iter()
        .map(|m| (m.origin(), m.text().to_string()))
        .collect();
    assert_eq!(texts.len(), 7);
    assert_eq!(texts[1], (Origin::User, "hi".to_string()));
    assert_eq!(texts[2], (Origin::User, "thanks".to_string()));
    assert_eq!(texts[3], (Origin::User, "lunch".to_string()));
    assert_eq!(texts[4], (Origin::Assistant, GREETING_REPLY.to_string()));
    assert_eq!(texts[5], (Origin::Assistant, THANKS_REPLY.to_string()));
    assert_eq!(texts[6].0, Origin::Assistant);
    let dish = extract_dish(&texts[6].1).unwrap();
    assert!(app.menu().dishes_for(MealCategory::Lunch).contains(dish));
}

#[test]
fn test_sequence_ids_strictly_increase() {
    let (clock, mut app) = test_app();
    for text in ["breakfast", "menu", "xyz"] {
        app.submit_chat(text).unwrap();
    }
    clock.advance(TYPING_DELAY_MS);
    app.tick();

    let ids: Vec<_> = app
        .session()
        .messages()
        .iter()
        .map(|m| m.sequence_id())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(ids, (1..=7).collect::<Vec<_>>());
}

#[test]
fn test_reply_timestamp_after_delay() {
    let (clock, mut app) = test_app();
    app.submit_chat("dinner").unwrap();
    let sent = app.session().last().unwrap().created_at();
    clock.advance(TYPING_DELAY_MS);
    app.tick();
    let replied = app.session().last().unwrap().created_at();
    assert_eq!(
        (replied - sent).num_milliseconds(),
        TYPING_DELAY_MS as i64
    );
}

#[test]
fn test_seeded_apps_reply_identically() {
    let config = BotConfig {
        typing_delay_ms: 0,
        rng_seed: Some(7),
        ..BotConfig::default()
    };
    let (_c1, mut a) = test_app_with(config.clone());
    let (_c2, mut b) = test_app_with(config);
    for text in ["breakfast", "menu", "snacks", "dinner"] {
        a.submit_chat(text).unwrap();
        b.submit_chat(text).unwrap();
    }
    let texts = |app: &messbot::App| {
        app.session()
            .messages()
            .iter()
            .map(|m| m.text().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(texts(&a), texts(&b));
}

#[test]
fn test_feedback_resets_after_window() {
    let (clock, mut app) = test_app();
    app.set_rating(4).unwrap();
    app.set_comment("Add more paneer").unwrap();

    let submission = app.submit_feedback().unwrap();
    assert_eq!(submission.rating_stars, 4);
    assert!(app.feedback().is_submitted());
    assert!(!app.is_typing());

    clock.advance(RESET_MS - 1);
    assert_eq!(app.tick(), 0);
    assert!(app.feedback().is_submitted());
    assert_eq!(app.feedback().comment(), "Add more paneer");

    clock.advance(1);
    assert_eq!(app.tick(), 1);
    assert!(!app.feedback().is_submitted());
    assert_eq!(app.feedback().rating(), 0);
    assert_eq!(app.feedback().comment(), "");
}

#[test]
fn test_feedback_needs_comment() {
    let (_clock, mut app) = test_app();
    app.set_rating(5).unwrap();
    let err = app.submit_feedback().unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(err.module(), "feedback");
    assert_eq!(app.pending_tasks(), 0);
}

#[test]
fn test_feedback_locked_while_confirming() {
    let (_clock, mut app) = test_app();
    app.set_comment("ok").unwrap();
    app.submit_feedback().unwrap();
    assert!(matches!(
        app.push_feedback_char('x'),
        Err(Error::Feedback(FeedbackError::AlreadySubmitted))
    ));
    assert_eq!(app.set_rating(2).unwrap_err().module(), "feedback");
    assert!(app.submit_feedback().is_err());
    assert_eq!(app.pending_tasks(), 1);
}

#[test]
fn test_chat_and_feedback_timers_interleave() {
    let (clock, mut app) = test_app();
    app.set_comment("Great biryani").unwrap();
    app.submit_feedback().unwrap();
    app.submit_chat("hello").unwrap();

    assert_eq!(app.next_deadline(), Some(clock_now(&clock) + TYPING_DELAY_MS));

    clock.advance(TYPING_DELAY_MS);
    app.tick();
    assert_eq!(app.session().last().unwrap().text(), GREETING_REPLY);
    assert!(app.feedback().is_submitted());

    clock.advance(RESET_MS);
    app.tick();
    assert!(!app.feedback().is_submitted());
    assert_eq!(app.pending_tasks(), 0);
}

fn clock_now(clock: &messbot::FixedClock) -> u64 {
    use messbot::Clock;
    clock.now_millis()
}

#[test]
fn test_initial_theme_from_config() {
    let (_clock, mut app) = test_app_with(BotConfig {
        theme: Theme::Dark,
        ..BotConfig::default()
    });
    assert!(app.theme().is_dark());
    app.toggle_theme();
    assert_eq!(app.theme(), Theme::Light);
}

#[test]
fn test_weekly_menu_modal() {
    let (_clock, mut app) = test_app();
    assert_eq!(app.weekly_menu(), None);
    app.open_weekly_menu(MealCategory::Dinner);
    app.open_weekly_menu(MealCategory::Lunch);
    assert_eq!(app.weekly_menu(), Some(MealCategory::Lunch));
    let friday = app
        .weekly_catalog()
        .items_for(MealCategory::Lunch, messbot::Weekday::Friday);
    assert!(friday.contains("Lassi"));
    app.close_weekly_menu();
    assert_eq!(app.weekly_menu(), None);
}

#[test]
fn test_ask_does_not_touch_log() {
    let (_clock, mut app) = test_app();
    let reply = app.ask("hello");
    assert_eq!(reply, GREETING_REPLY);
    assert_eq!(app.session().len(), 1);
    assert_eq!(app.pending_tasks(), 0);
}


#[test]
fn test_submitted_form_always_has_reset_pending() {
    let (clock, mut app) = test_app();
    app.set_comment("Less oil in the curry").unwrap();
    app.nudge_rating(true).unwrap();
    app.push_feedback_char('!').unwrap();
    app.pop_feedback_char().unwrap();

    app.submit_feedback().unwrap();
    assert!(app.feedback().is_submitted());
    assert_eq!(app.pending_tasks(), 1);
    assert!(app.submit_feedback().is_err());
    assert_eq!(app.pending_tasks(), 1);

    clock.advance(RESET_MS * 100);
    app.tick();
    assert!(!app.feedback().is_submitted());
    assert_eq!(app.feedback().comment(), "");
    assert_eq!(app.pending_tasks(), 0);
}
