//! Workout log.
//!
//! Entries get sequential ids starting at 1. Ids are never reused within
//! a log, even after removals; only `reset` rewinds the counter.

use crate::catalog::get_default_catalog;
use crate::types::{PlanDay, WorkoutEntry, WorkoutSummary};

const DAYS_PER_WEEK: u8 = 7;

/// In-memory log of workouts, kept in insertion order
#[derive(Clone, Debug)]
pub struct WorkoutLog {
    workouts: Vec<WorkoutEntry>,
    next_id: u64,
}

impl Default for WorkoutLog {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self {
            workouts: Vec::new(),
            next_id: 1,
        }
    }

    /// Log a workout and return the stored entry
    ///
    /// A missing date defaults to today's local date (`YYYY-MM-DD`).
    pub fn add(
        &mut self,
        name: impl Into<String>,
        duration: f64,
        calories_burned: f64,
        date: Option<String>,
    ) -> WorkoutEntry {
        let date = date.unwrap_or_else(today);
        let entry = WorkoutEntry {
            id: self.next_id,
            name: name.into(),
            duration,
            calories_burned,
            date,
        };
        self.next_id += 1;
        self.workouts.push(entry.clone());

        tracing::debug!("Logged workout {} ({}) on {}", entry.id, entry.name, entry.date);
        entry
    }

    /// Remove a workout by id; unknown ids are ignored
    pub fn remove(&mut self, id: u64) {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        if self.workouts.len() == before {
            tracing::debug!("No workout with id {} to remove", id);
        } else {
            tracing::debug!("Removed workout {}", id);
        }
    }

    pub fn list(&self) -> &[WorkoutEntry] {
        &self.workouts
    }

    pub fn total_duration(&self) -> f64 {
        self.workouts.iter().map(|w| w.duration).sum()
    }

    pub fn total_calories(&self) -> f64 {
        self.workouts.iter().map(|w| w.calories_burned).sum()
    }

    /// Workouts whose date string matches exactly
    pub fn by_date(&self, date: &str) -> Vec<&WorkoutEntry> {
        self.workouts.iter().filter(|w| w.date == date).collect()
    }

    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            total_workouts: self.workouts.len(),
            total_duration: self.total_duration(),
            total_calories: self.total_calories(),
        }
    }

    /// Suggested workout for a goal type (cardio, strength, flexibility)
    pub fn suggest_workout(&self, goal_type: &str) -> &'static str {
        get_default_catalog().workout_for(goal_type)
    }

    /// Seven days of the same suggestion
    pub fn weekly_plan(&self, goal_type: &str) -> Vec<PlanDay> {
        let workout = self.suggest_workout(goal_type);
        (1..=DAYS_PER_WEEK)
            .map(|day| PlanDay {
                day,
                workout: workout.to_string(),
            })
            .collect()
    }

    /// Clear all workouts and restart ids at 1
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("Workout log reset");
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
