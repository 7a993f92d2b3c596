use crate::app::AppState;
use crate::key_event::{AppKeyCode, AppKeyEvent};
use crate::types::Mode;
use crate::utils::{
    clamp_selection, handle_single_line_textarea_key, reset_goal_input, selected_goal_id,
    single_line_textarea_value,
};

/// Returns true when the user asked to quit.
pub fn handle_view_key(state: &mut AppState, key: &AppKeyEvent) -> bool {
    match key.code {
        AppKeyCode::Char('q') => return true,
        AppKeyCode::Up | AppKeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
        }
        AppKeyCode::Down | AppKeyCode::Char('j') => {
            let max_idx = state.tracker.len().saturating_sub(1);
            state.selected = state.selected.saturating_add(1).min(max_idx);
        }
        AppKeyCode::Char(' ') | AppKeyCode::Enter => {
            if let Some(id) = selected_goal_id(state) {
                state.tracker.toggle(id);
            }
        }
        AppKeyCode::Char('a') => {
            reset_goal_input(state);
            state.mode = Mode::AddGoal;
        }
        AppKeyCode::Char('d') | AppKeyCode::Delete => {
            if let Some(id) = selected_goal_id(state) {
                state.tracker.remove(id);
                clamp_selection(state);
            }
        }
        AppKeyCode::Char('t') => state.toggle_theme(),
        AppKeyCode::Char('r') => state.refresh_quote(),
        _ => {}
    }
    false
}

pub fn handle_add_goal_key(state: &mut AppState, key: &AppKeyEvent) {
    match key.code {
        AppKeyCode::Esc => {
            reset_goal_input(state);
            state.mode = Mode::View;
        }
        AppKeyCode::Enter => {
            let text = single_line_textarea_value(&state.goal_input);
            // Blank input keeps the dialog open.
            if state.tracker.add(&text).is_some() {
                reset_goal_input(state);
                state.selected = state.tracker.len() - 1;
                state.mode = Mode::View;
            }
        }
        _ => {
            handle_single_line_textarea_key(&mut state.goal_input, key);
        }
    }
}
