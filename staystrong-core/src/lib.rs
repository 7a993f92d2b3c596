pub mod app;
pub mod error;
pub mod goals;
pub mod handlers;
pub mod key_event;
pub mod quote;
pub mod style;
pub mod types;
pub mod ui;
pub mod utils;

pub use error::QuoteError;
pub use goals::{Goal, GoalId, GoalStats, GoalTracker, SeedGoal};
pub use quote::{HttpQuoteSource, QuoteSource, QuoteState};
