use chrono::{Local, NaiveDate};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::goals::Goal;
use crate::style::{palette, Palette};
use crate::types::Mode;
use crate::utils::{centered_rect_fixed_height, format_long_date};

pub const TITLE: &str = "StayStrong Dashboard";

// ── Goal rows ────────────────────────────────────────────────────────────

/// Text of one goal row without styling: check box, label, streak badge.
pub fn goal_label(goal: &Goal) -> String {
    let check = if goal.completed { "[x]" } else { "[ ]" };
    if goal.streak > 0 {
        format!("{check} {}  🔥{}", goal.text, goal.streak)
    } else {
        format!("{check} {}", goal.text)
    }
}

fn goal_item<'a>(goal: &'a Goal, colors: &Palette) -> ListItem<'a> {
    let (check, check_style, text_style) = if goal.completed {
        (
            "[x] ",
            Style::default().fg(colors.done).add_modifier(Modifier::BOLD),
            Style::default()
                .fg(colors.dim)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(colors.dim), Style::default().fg(colors.fg))
    };
    let mut spans = vec![
        Span::styled(check, check_style),
        Span::styled(goal.text.as_str(), text_style),
    ];
    if goal.streak > 0 {
        spans.push(Span::styled(
            format!("  🔥{}", goal.streak),
            Style::default().fg(colors.streak),
        ));
    }
    ListItem::new(Line::from(spans))
}

// ── Main UI ──────────────────────────────────────────────────────────────

/// Render the entire dashboard for today's date.
pub fn ui(f: &mut Frame, state: &AppState) {
    render_dashboard(f, state, Local::now().date_naive());
}

pub fn render_dashboard(f: &mut Frame, state: &AppState, today: NaiveDate) {
    let colors = palette(state.theme);
    let base = Style::default().fg(colors.fg).bg(colors.bg);

    f.render_widget(Block::default().style(base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Stats
            Constraint::Length(5), // Quote
            Constraint::Min(6),    // Goals + progress
            Constraint::Length(2), // Footer
        ])
        .split(f.area());

    render_header(f, state, &colors, today, chunks[0]);
    render_stats(f, state, &colors, chunks[1]);
    render_quote(f, state, &colors, chunks[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[3]);
    render_goals(f, state, &colors, body[0]);
    render_progress(f, state, &colors, body[1]);
    render_footer(f, &colors, chunks[4]);

    render_add_goal_dialog(f, state, &colors);
}

fn render_header(f: &mut Frame, state: &AppState, colors: &Palette, today: NaiveDate, area: Rect) {
    let switch = if state.theme.is_dark() {
        "☀ ( ●) ☾"
    } else {
        "☀ (● ) ☾"
    };
    let line = Line::from(vec![
        Span::styled(format_long_date(today), Style::default().fg(colors.dim)),
        Span::raw("   "),
        Span::styled(
            format!("{switch} {} (t)", state.theme.label()),
            Style::default().fg(colors.accent),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                TITLE,
                Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(colors.accent)),
    );
    f.render_widget(header, area);
}

fn render_stats(f: &mut Frame, state: &AppState, colors: &Palette, area: Rect) {
    let stats = state.stats();
    let cards = [
        (
            "Goals Today",
            format!("{}/{}", stats.completed, stats.total),
            colors.accent,
        ),
        ("Total Streak", stats.total_streak.to_string(), colors.streak),
        ("Progress", format!("{}%", stats.rounded_percentage()), colors.done),
        ("Level", stats.level.to_string(), colors.level),
    ];
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    for ((title, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(colors.dim)),
        );
        f.render_widget(card, *card_area);
    }
}

fn render_quote(f: &mut Frame, state: &AppState, colors: &Palette, area: Rect) {
    let body = if state.quote.is_loading() {
        Line::from(Span::styled(
            "Fetching a new quote...",
            Style::default().fg(colors.dim),
        ))
    } else {
        Line::from(Span::styled(
            format!("\"{}\"", state.quote.text()),
            Style::default().fg(colors.fg).add_modifier(Modifier::ITALIC),
        ))
    };
    let quote = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("♥ Daily Inspiration", Style::default().fg(colors.quote)))
            .title_bottom(Line::from("r: new quote").right_aligned())
            .border_style(Style::default().fg(colors.dim)),
    );
    f.render_widget(quote, area);
}

fn render_goals(f: &mut Frame, state: &AppState, colors: &Palette, area: Rect) {
    let items: Vec<ListItem> = state
        .tracker
        .goals()
        .iter()
        .map(|goal| goal_item(goal, colors))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Today's Goals (a add • space toggle • d delete)")
        .border_style(Style::default().fg(if state.mode == Mode::View {
            colors.accent
        } else {
            colors.dim
        }));

    if items.is_empty() {
        let empty = Paragraph::new("No goals yet. Press 'a' to add one.")
            .style(Style::default().fg(colors.dim))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(state.tracker.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_progress(f: &mut Frame, state: &AppState, colors: &Palette, area: Rect) {
    let stats = state.stats();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Progress Tracker")
        .border_style(Style::default().fg(colors.dim));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Caption
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Completed / remaining
            Constraint::Min(1),    // Streak
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(format!("Daily Completion  {}%", stats.rounded_percentage()))
            .style(Style::default().fg(colors.dim)),
        rows[0],
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(colors.accent))
        .ratio(stats.ratio())
        .label("")
        .use_unicode(true);
    f.render_widget(gauge, rows[1]);

    let counts = Line::from(vec![
        Span::styled(
            format!("{} Completed", stats.completed),
            Style::default().fg(colors.done).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} Remaining", stats.remaining()),
            Style::default().fg(colors.streak).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(counts), rows[3]);

    let streak = vec![
        Line::from(Span::styled(
            format!("{} Total Streak Days", stats.total_streak),
            Style::default().fg(colors.level).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Keep it up! 🔥", Style::default().fg(colors.dim))),
    ];
    f.render_widget(Paragraph::new(streak), rows[4]);
}

fn render_footer(f: &mut Frame, colors: &Palette, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from("Remember: Progress, not perfection. You've got this! 💪"),
        Line::from("Every small step counts towards your bigger goals."),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(colors.dim));
    f.render_widget(footer, area);
}

// ── Dialogs ──────────────────────────────────────────────────────────────

fn render_add_goal_dialog(f: &mut Frame, state: &AppState, colors: &Palette) {
    if state.mode != Mode::AddGoal {
        return;
    }

    let area = centered_rect_fixed_height(60, 4, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add Goal")
        .style(Style::default().fg(colors.fg).bg(colors.bg))
        .border_style(Style::default().fg(colors.accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Min(1),    // Help
        ])
        .split(inner);

    let prompt = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(layout[0]);
    f.render_widget(Paragraph::new("> "), prompt[0]);
    f.render_widget(&state.goal_input, prompt[1]);

    f.render_widget(
        Paragraph::new("Enter: add • Esc: cancel").style(Style::default().fg(colors.dim)),
        layout[1],
    );
}
