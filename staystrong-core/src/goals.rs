use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub type GoalId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: GoalId,
    pub text: String,
    pub completed: bool,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedGoal {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub streak: u32,
}

impl SeedGoal {
    pub fn new(text: impl Into<String>, completed: bool, streak: u32) -> Self {
        Self {
            text: text.into(),
            completed,
            streak,
        }
    }
}

pub fn sample_goals() -> Vec<SeedGoal> {
    vec![
        SeedGoal::new("Drink 8 glasses of water", false, 3),
        SeedGoal::new("Read 10 pages", true, 7),
        SeedGoal::new("Exercise for 30 minutes", false, 2),
        SeedGoal::new("Practice gratitude", true, 5),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalStats {
    pub completed: usize,
    pub total: usize,
    /// 0.0..=100.0, zero for an empty list.
    pub percentage: f64,
    pub total_streak: u64,
    pub level: u64,
}

impl GoalStats {
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }

    /// Ratio for gauges, clamped to 0.0..=1.0.
    pub fn ratio(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

pub fn level_for(total_streak: u64) -> u64 {
    total_streak / 10 + 1
}

#[derive(Debug, Default, Clone)]
pub struct GoalTracker {
    goals: Vec<Goal>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank seeds are skipped.
    pub fn from_seeds<I>(seeds: I) -> Self
    where
        I: IntoIterator<Item = SeedGoal>,
    {
        let goals = seeds
            .into_iter()
            .filter(|seed| !seed.text.trim().is_empty())
            .map(|seed| Goal {
                id: Uuid::new_v4(),
                text: seed.text,
                completed: seed.completed,
                streak: seed.streak,
            })
            .collect();
        Self { goals }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// `None` for blank text.
    pub fn add(&mut self, text: &str) -> Option<GoalId> {
        if text.trim().is_empty() {
            return None;
        }
        let id = Uuid::new_v4();
        self.goals.push(Goal {
            id,
            text: text.to_string(),
            completed: false,
            streak: 0,
        });
        debug!(%id, text, "goal added");
        Some(id)
    }

    /// Un-completing keeps the streak.
    pub fn toggle(&mut self, id: GoalId) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        if !goal.completed {
            goal.streak = goal.streak.saturating_add(1);
        }
        goal.completed = !goal.completed;
        debug!(%id, completed = goal.completed, streak = goal.streak, "goal toggled");
        true
    }

    pub fn remove(&mut self, id: GoalId) -> Option<Goal> {
        let idx = self.goals.iter().position(|g| g.id == id)?;
        let removed = self.goals.remove(idx);
        debug!(%id, "goal removed");
        Some(removed)
    }

    pub fn stats(&self) -> GoalStats {
        let completed = self.goals.iter().filter(|g| g.completed).count();
        let total = self.goals.len();
        let percentage = if total == 0 {
            0.0
        } else {
            completed as f64 * 100.0 / total as f64
        };
        let total_streak: u64 = self.goals.iter().map(|g| u64::from(g.streak)).sum();
        GoalStats {
            completed,
            total,
            percentage,
            total_streak,
            level: level_for(total_streak),
        }
    }
}
