use std::sync::Arc;

use tui_textarea::TextArea;

use crate::goals::{GoalStats, GoalTracker, SeedGoal};
use crate::handlers::{handle_add_goal_key, handle_view_key};
use crate::key_event::AppKeyEvent;
use crate::quote::{QuoteFetcher, QuoteSource, QuoteState};
use crate::types::{Mode, Theme};
use crate::utils::single_line_textarea;

pub const GOAL_INPUT_PLACEHOLDER: &str = "Enter a new goal...";

/// Central dashboard state. Rendering only reads it; all mutation goes
/// through its methods and the key handlers.
pub struct AppState {
    pub tracker: GoalTracker,
    pub quote: QuoteState,
    pub theme: Theme,
    pub mode: Mode,
    pub selected: usize,
    pub goal_input: TextArea<'static>,
    fetcher: QuoteFetcher,
}

impl AppState {
    /// Build the dashboard and kick off the first quote fetch.
    pub fn new<I>(seeds: I, theme: Theme, source: Arc<dyn QuoteSource>) -> Self
    where
        I: IntoIterator<Item = SeedGoal>,
    {
        let mut state = Self {
            tracker: GoalTracker::from_seeds(seeds),
            quote: QuoteState::default(),
            theme,
            mode: Mode::View,
            selected: 0,
            goal_input: single_line_textarea(GOAL_INPUT_PLACEHOLDER),
            fetcher: QuoteFetcher::new(source),
        };
        state.refresh_quote();
        state
    }

    pub fn stats(&self) -> GoalStats {
        self.tracker.stats()
    }

    /// Start another fetch. Earlier in-flight fetches are not cancelled.
    pub fn refresh_quote(&mut self) {
        self.fetcher.request(&mut self.quote);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = self.theme.label(), "theme changed");
        self.refresh_quote();
    }

    /// Dispatch a key event. Returns true if the app should quit.
    pub fn handle_key(&mut self, key: AppKeyEvent) -> bool {
        if key.is_ctrl_c() {
            return true;
        }
        match self.mode {
            Mode::View => handle_view_key(self, &key),
            Mode::AddGoal => {
                handle_add_goal_key(self, &key);
                false
            }
        }
    }

    /// Apply finished background work (call on every frame / poll cycle).
    pub fn tick(&mut self) -> bool {
        self.fetcher.poll(&mut self.quote)
    }
}
