//! Core domain types for FitTrack.
//!
//! This module defines the records held by the four stores:
//! - Workout and meal entries (id-keyed, immutable once logged)
//! - Weight, height and heart-rate readings (append-only)
//! - Goals (keyed by goal type, mutated in place)
//! - Small derived views (summaries, plan days, goal reports)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Entry Types
// ============================================================================

/// A logged workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    pub id: u64,
    pub name: String,
    /// Minutes
    pub duration: f64,
    pub calories_burned: f64,
    pub date: String,
}

/// Macronutrient grams for a single meal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Macros {
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

impl Macros {
    pub fn new(proteins: f64, fats: f64, carbs: f64) -> Self {
        Self {
            proteins,
            fats,
            carbs,
        }
    }

    /// Build from a loosely keyed map; absent keys count as zero and
    /// unrecognised keys are ignored.
    pub fn from_map(map: &HashMap<String, f64>) -> Self {
        let get = |key: &str| map.get(key).copied().unwrap_or(0.0);
        Self {
            proteins: get("proteins"),
            fats: get("fats"),
            carbs: get("carbs"),
        }
    }

    /// Label/value pairs in a fixed order (proteins, fats, carbs)
    pub fn labelled(&self) -> [(&'static str, f64); 3] {
        [
            ("proteins", self.proteins),
            ("fats", self.fats),
            ("carbs", self.carbs),
        ]
    }
}

impl std::ops::AddAssign for Macros {
    fn add_assign(&mut self, other: Self) {
        self.proteins += other.proteins;
        self.fats += other.fats;
        self.carbs += other.carbs;
    }
}

/// A logged meal
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub id: u64,
    pub meal_name: String,
    pub calories: f64,
    pub macros: Macros,
}

// ============================================================================
// Health Readings
// ============================================================================

/// Body weight in kilograms
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightRecord {
    pub weight: f64,
    pub date: String,
}

/// Height in meters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HeightRecord {
    pub height: f64,
    pub date: String,
}

/// Heart rate in beats per minute
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HeartRateRecord {
    pub heart_rate: f64,
    pub time: String,
}

// ============================================================================
// Goals
// ============================================================================

/// A fitness goal; progress is a running total with no history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub goal_type: String,
    pub target: f64,
    pub progress: f64,
    pub deadline: Option<String>,
}

impl Goal {
    pub fn remaining(&self) -> f64 {
        self.target - self.progress
    }
}

/// One row of the goal progress report
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GoalReport {
    pub goal_type: String,
    pub target: f64,
    pub progress: f64,
    pub remaining: f64,
    pub deadline: Option<String>,
}

impl From<&Goal> for GoalReport {
    fn from(goal: &Goal) -> Self {
        GoalReport {
            goal_type: goal.goal_type.clone(),
            target: goal.target,
            progress: goal.progress,
            remaining: goal.remaining(),
            deadline: goal.deadline.clone(),
        }
    }
}

// ============================================================================
// Derived Views
// ============================================================================

/// Workout totals across the whole log
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    pub total_workouts: usize,
    pub total_duration: f64,
    pub total_calories: f64,
}

/// A day in a generated weekly plan (days are numbered 1..=7)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanDay {
    pub day: u8,
    pub workout: String,
}

/// A meal from the built-in suggestion catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MealSuggestion {
    pub meal_name: String,
    pub calories: f64,
}
