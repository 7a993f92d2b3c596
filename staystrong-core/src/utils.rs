use chrono::NaiveDate;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tui_textarea::{Input, Key, TextArea};

use crate::app::{AppState, GOAL_INPUT_PLACEHOLDER};
use crate::goals::GoalId;
use crate::key_event::{AppKeyCode, AppKeyEvent};

// ── Single-line TextArea helpers ────────────────────────────────────────

pub fn single_line_textarea(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(placeholder.to_string());
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea
}

pub fn single_line_textarea_value(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("")
}

/// Feed an editing key to a single-line input. Returns true if consumed.
pub fn handle_single_line_textarea_key(
    textarea: &mut TextArea<'static>,
    key: &AppKeyEvent,
) -> bool {
    let Some(input) = app_key_to_textarea_input(key) else {
        return false;
    };
    textarea.input(input);
    true
}

fn app_key_to_textarea_input(key: &AppKeyEvent) -> Option<Input> {
    let mapped = match key.code {
        AppKeyCode::Char(c) => Key::Char(c),
        AppKeyCode::Backspace => Key::Backspace,
        AppKeyCode::Delete => Key::Delete,
        AppKeyCode::Left => Key::Left,
        AppKeyCode::Right => Key::Right,
        AppKeyCode::Home => Key::Home,
        AppKeyCode::End => Key::End,
        _ => return None,
    };
    Some(Input {
        key: mapped,
        ctrl: key.ctrl,
        alt: key.alt,
        shift: key.shift,
    })
}

// ── Layout ───────────────────────────────────────────────────────────────

pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical_pad = r.height.saturating_sub(height) / 2;

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_pad),
            Constraint::Length(height),
            Constraint::Length(vertical_pad),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

// ── Formatting / selection ───────────────────────────────────────────────

/// e.g. "Saturday, October 17, 2026".
pub fn format_long_date(day: NaiveDate) -> String {
    day.format("%A, %B %-d, %Y").to_string()
}

pub fn selected_goal_id(state: &AppState) -> Option<GoalId> {
    state.tracker.goals().get(state.selected).map(|g| g.id)
}

pub fn reset_goal_input(state: &mut AppState) {
    state.goal_input = single_line_textarea(GOAL_INPUT_PLACEHOLDER);
}

/// Keep the cursor on a real row after the list shrinks.
pub fn clamp_selection(state: &mut AppState) {
    state.selected = state.selected.min(state.tracker.len().saturating_sub(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_matches_dashboard_header() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(format_long_date(day), "Saturday, October 17, 2026");
    }

    #[test]
    fn textarea_takes_chars_but_not_enter() {
        let mut textarea = single_line_textarea("Enter a new goal...");
        assert!(handle_single_line_textarea_key(&mut textarea, &AppKeyEvent::char('h')));
        assert!(handle_single_line_textarea_key(&mut textarea, &AppKeyEvent::char('i')));
        assert!(!handle_single_line_textarea_key(
            &mut textarea,
            &AppKeyEvent::plain(AppKeyCode::Enter)
        ));
        assert_eq!(single_line_textarea_value(&textarea), "hi");
    }
}
