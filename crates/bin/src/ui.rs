use chrono::Datelike;
use messbot::{MealCategory, Theme, Weekday, constants::MAX_RATING, session::Origin};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::screen::{ChatScreen, Focus};

/// Colors for one theme.
struct Palette {
    bg: Color,
    fg: Color,
    accent: Color,
    muted: Color,
    user: Color,
    bot: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Rgb(234, 88, 12),
            muted: Color::DarkGray,
            user: Color::Blue,
            bot: Color::Rgb(194, 65, 12),
        },
        Theme::Dark => Palette {
            bg: Color::Rgb(17, 24, 39),
            fg: Color::Gray,
            accent: Color::Rgb(251, 146, 60),
            muted: Color::DarkGray,
            user: Color::LightBlue,
            bot: Color::Rgb(253, 186, 116),
        },
    }
}

pub fn ui(f: &mut ratatui::Frame, screen: &ChatScreen) {
    let colors = palette(screen.app.theme());
    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg).fg(colors.fg)),
        f.area(),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Chat and feedback
            Constraint::Length(1), // Status / key hints
        ])
        .split(f.area());

    render_header(f, rows[0], screen, &colors);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[1]);
    render_chat(f, panels[0], screen, &colors);
    render_feedback(f, panels[1], screen, &colors);
    render_status(f, rows[2], screen, &colors);

    if let Some(category) = screen.app.weekly_menu() {
        render_weekly_menu(f, screen, category, &colors);
    }
}

fn render_header(f: &mut ratatui::Frame, area: Rect, screen: &ChatScreen, colors: &Palette) {
    let menus: Vec<Span> = MealCategory::ALL
        .into_iter()
        .enumerate()
        .flat_map(|(i, category)| {
            [
                Span::styled(format!(" F{} ", i + 1), Style::default().fg(colors.accent)),
                Span::raw(format!("{} {}", category.icon(), category.label())),
            ]
        })
        .collect();

    let mut spans = vec![Span::styled(
        "🍽️ Tirupati Mess · Chef Bot  ",
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(menus);

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Theme: {} (Ctrl+T)", screen.app.theme()))
                .border_style(Style::default().fg(colors.muted)),
        );
    f.render_widget(header, area);
}

fn panel_block<'a>(title: String, focused: bool, colors: &Palette) -> Block<'a> {
    let border = if focused { colors.accent } else { colors.muted };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

fn render_chat(f: &mut ratatui::Frame, area: Rect, screen: &ChatScreen, colors: &Palette) {
    let typing = screen.app.is_typing();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if typing { 1 } else { 0 }),
            Constraint::Length(3),
        ])
        .split(area);

    let messages = screen.app.session().messages();
    let width = usize::from(chunks[0].width.saturating_sub(2)).max(1);
    let items: Vec<ListItem> = messages
        .iter()
        .map(|m| {
            let (author, color) = match m.origin() {
                Origin::Assistant => ("Chef Bot", colors.bot),
                Origin::User => ("You", colors.user),
            };
            let timestamp = m.created_at().with_timezone(&chrono::Local).format("%H:%M");
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{author} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{timestamp}"), Style::default().fg(colors.muted)),
            ])];
            lines.extend(wrap(m.text(), width).into_iter().map(Line::from));
            lines.push(Line::default());
            ListItem::new(Text::from(lines))
        })
        .collect();

    let selected = messages.len().checked_sub(1 + screen.scroll);
    let mut state = ListState::default().with_selected(selected);
    let list = List::new(items).block(panel_block(
        format!("Chat ({}) - Enter to send", messages.len()),
        screen.focus == Focus::Chat,
        colors,
    ));
    f.render_stateful_widget(list, chunks[0], &mut state);

    if typing {
        let indicator = Paragraph::new(" Chef Bot is typing...").style(
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::ITALIC),
        );
        f.render_widget(indicator, chunks[1]);
    }

    let input = Paragraph::new(screen.input.as_str())
        .style(Style::default().fg(colors.fg))
        .block(panel_block(
            "Ask about breakfast, lunch, snacks or dinner".to_string(),
            screen.focus == Focus::Chat,
            colors,
        ));
    f.render_widget(input, chunks[2]);

    if screen.focus == Focus::Chat && screen.app.weekly_menu().is_none() {
        f.set_cursor_position((
            chunks[2].x + cursor_offset(&screen.input, chunks[2].width) + 1,
            chunks[2].y + 1,
        ));
    }
}

/// Cursor column after `input`, kept inside a bordered box `box_width` wide.
fn cursor_offset(input: &str, box_width: u16) -> u16 {
    let inner = usize::from(box_width.saturating_sub(2));
    // Fits in u16: inner came from a u16.
    input.chars().count().min(inner) as u16
}

fn render_feedback(f: &mut ratatui::Frame, area: Rect, screen: &ChatScreen, colors: &Palette) {
    let form = screen.app.feedback();
    let focused = screen.focus == Focus::Feedback;
    let block = panel_block("Feedback (Tab)".to_string(), focused, colors);

    if form.is_submitted() {
        let thanks = Paragraph::new(vec![
            Line::default(),
            Line::styled(
                "✅ Thank you for your feedback!",
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled("We appreciate your input.", Style::default().fg(colors.muted)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(thanks, area);
        return;
    }

    let stars: String = (1..=MAX_RATING)
        .map(|i| if i <= form.rating() { '★' } else { '☆' })
        .collect();
    let comment = if form.comment().is_empty() {
        Span::styled("Share your suggestions...", Style::default().fg(colors.muted))
    } else {
        Span::raw(form.comment())
    };
    let submit_hint = if form.can_submit() {
        Span::styled("Enter to submit", Style::default().fg(colors.accent))
    } else {
        Span::styled("Write a comment to submit", Style::default().fg(colors.muted))
    };

    let body = Paragraph::new(vec![
        Line::from("Rate your experience (←/→)"),
        Line::styled(stars, Style::default().fg(colors.accent)),
        Line::default(),
        Line::from("Suggestions"),
        Line::from(comment),
        Line::default(),
        Line::from(submit_hint),
    ])
    .wrap(Wrap { trim: false })
    .block(block);
    f.render_widget(body, area);
}

fn render_status(f: &mut ratatui::Frame, area: Rect, screen: &ChatScreen, colors: &Palette) {
    let status = match &screen.status_message {
        Some(msg) => Paragraph::new(msg.as_str()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new("Tab focus · F1-F4 weekly menu · Ctrl+T theme · Esc quit")
            .style(Style::default().fg(colors.muted)),
    };
    f.render_widget(status.alignment(Alignment::Center), area);
}

fn render_weekly_menu(
    f: &mut ratatui::Frame,
    screen: &ChatScreen,
    category: MealCategory,
    colors: &Palette,
) {
    let area = popup_area(f.area(), 80, 70);
    let today = Weekday::from(chrono::Local::now().date_naive().weekday());

    let rows: Vec<Row> = screen
        .app
        .weekly_catalog()
        .week(category)
        .map(|(day, items)| {
            let style = if day == today {
                Style::default()
                    .fg(colors.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg)
            };
            Row::new(vec![
                Cell::from(day.name()),
                Cell::from(items.items().join(", ")),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(0)])
        .header(
            Row::new(vec!["Day", "Items"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "{} {} Menu - Esc to close",
                    category.icon(),
                    category.label()
                ))
                .border_style(Style::default().fg(colors.accent))
                .style(Style::default().bg(colors.bg)),
        );

    f.render_widget(Clear, area);
    f.render_widget(table, area);
}

/// Centered rectangle taking the given percentages of `area`.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Greedy word wrap by char count. Existing line breaks are kept.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for raw in text.lines() {
        let mut line = String::new();
        let mut len = 0;
        for word in raw.split(' ') {
            let word_len = word.chars().count();
            if len > 0 && len + 1 + word_len > width {
                out.push(std::mem::take(&mut line));
                len = 0;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.push_str(word);
            len += word_len;
        }
        out.push(line);
    }
    out
}
