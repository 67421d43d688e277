//! Goal registry.
//!
//! Goals are keyed by their goal type and keep the order they were first
//! set in. Operations on an unknown goal type are silent no-ops.

use crate::types::{Goal, GoalReport};

/// Days the remaining amount is spread over by `suggest_daily_steps`
const STEP_PLAN_DAYS: f64 = 30.0;

#[derive(Clone, Debug, Default)]
pub struct GoalRegistry {
    goals: Vec<Goal>,
}

impl GoalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, goal_type: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.goal_type == goal_type)
    }

    fn find_mut(&mut self, goal_type: &str) -> Option<&mut Goal> {
        let goal = self.goals.iter_mut().find(|g| g.goal_type == goal_type);
        if goal.is_none() {
            tracing::debug!("No goal '{}' to update", goal_type);
        }
        goal
    }

    /// Create a goal, or replace an existing one with zero progress and no deadline
    pub fn set_goal(&mut self, goal_type: impl Into<String>, target: f64) {
        let goal = Goal {
            goal_type: goal_type.into(),
            target,
            progress: 0.0,
            deadline: None,
        };
        tracing::debug!("Set goal '{}' with target {}", goal.goal_type, target);
        match self.goals.iter().position(|g| g.goal_type == goal.goal_type) {
            Some(index) => self.goals[index] = goal,
            None => self.goals.push(goal),
        }
    }

    /// Progress per goal type
    pub fn progress(&self) -> Vec<(String, f64)> {
        self.goals
            .iter()
            .map(|g| (g.goal_type.clone(), g.progress))
            .collect()
    }

    /// Add `delta` to a goal's progress
    pub fn update_progress(&mut self, goal_type: &str, delta: f64) {
        if let Some(goal) = self.find_mut(goal_type) {
            goal.progress += delta;
            tracing::debug!("Goal '{}' progress now {}", goal_type, goal.progress);
        }
    }

    /// Target minus progress, `None` for an unknown goal type
    pub fn remaining(&self, goal_type: &str) -> Option<f64> {
        self.find(goal_type).map(Goal::remaining)
    }

    /// Remaining amount spread evenly over 30 days
    pub fn suggest_daily_steps(&self, goal_type: &str) -> Option<f64> {
        self.remaining(goal_type).map(|r| r / STEP_PLAN_DAYS)
    }

    pub fn progress_report(&self) -> Vec<GoalReport> {
        self.goals.iter().map(GoalReport::from).collect()
    }

    pub fn set_deadline(&mut self, goal_type: &str, deadline: impl Into<String>) {
        if let Some(goal) = self.find_mut(goal_type) {
            goal.deadline = Some(deadline.into());
        }
    }

    /// Change a goal's target, keeping its progress
    pub fn adjust_goal(&mut self, goal_type: &str, new_target: f64) {
        if let Some(goal) = self.find_mut(goal_type) {
            goal.target = new_target;
        }
    }

    pub fn get(&self, goal_type: &str) -> Option<&Goal> {
        self.find(goal_type)
    }

    pub fn view_all(&self) -> &[Goal] {
        &self.goals
    }

    pub fn reset_all(&mut self) {
        self.goals.clear();
        tracing::info!("All goals reset");
    }
}
