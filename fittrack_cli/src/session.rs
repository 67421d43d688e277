//! The four stores owned by one interactive session.

use fittrack_core::{GoalRegistry, HealthMetrics, Macros, MealLog, Reporter, WorkoutLog};

#[derive(Debug, Default)]
pub struct Session {
    pub workouts: WorkoutLog,
    pub meals: MealLog,
    pub health: HealthMetrics,
    pub goals: GoalRegistry,
}

impl Session {
    /// Empty stores with the configured daily calorie goal applied
    pub fn new(daily_calorie_goal: f64) -> Self {
        let mut session = Self::default();
        session.meals.set_calorie_goal(daily_calorie_goal);
        session
    }

    pub fn reporter(&self) -> Reporter<'_> {
        Reporter::new(&self.workouts, &self.meals, &self.health, &self.goals)
    }

    /// Fill every store with a fixed week of sample data
    pub fn seed_demo(&mut self) {
        let workouts = [
            ("Running", 30.0, 300.0, "2024-01-01"),
            ("Weight lifting", 45.0, 250.0, "2024-01-01"),
            ("Yoga", 60.0, 180.0, "2024-01-02"),
            ("Cycling", 40.0, 350.0, "2024-01-04"),
        ];
        for (name, duration, calories, date) in workouts {
            self.workouts.add(name, duration, calories, Some(date.to_string()));
        }

        self.meals.add("Oatmeal", 320.0, Macros::new(12.0, 6.0, 54.0));
        self.meals.add("Grilled Chicken Salad", 350.0, Macros::new(35.0, 14.0, 12.0));
        self.meals.add("Protein Smoothie", 250.0, Macros::new(25.0, 5.0, 28.0));

        self.health.log_height(1.75, "2024-01-01");
        self.health.log_weight(78.0, "2024-01-01");
        self.health.log_weight(77.4, "2024-01-04");
        self.health.log_heart_rate(62.0, "07:00");
        self.health.log_heart_rate(118.0, "07:30");

        self.goals.set_goal("weight_loss", 5.0);
        self.goals.update_progress("weight_loss", 0.6);
        self.goals.set_deadline("weight_loss", "2024-03-31");
        self.goals.set_goal("run_km", 100.0);
        self.goals.update_progress("run_km", 12.0);

        tracing::debug!("Seeded demo session");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_calorie_goal() {
        let session = Session::new(2000.0);
        assert_eq!(session.meals.remaining_calories(), 2000.0);
        assert!(session.workouts.list().is_empty());
    }

    #[test]
    fn test_seed_demo_populates_every_store() {
        let mut session = Session::new(0.0);
        session.seed_demo();

        let stats = session.reporter().recent_stats();
        assert_eq!(stats.workout_summary.total_workouts, 4);
        assert_eq!(stats.workout_summary.total_duration, 175.0);
        assert_eq!(stats.daily_calories, 920.0);
        assert_eq!(stats.recent_weight.map(|w| w.weight), Some(77.4));
        assert_eq!(stats.goals.len(), 2);
        assert_eq!(session.health.average_heart_rate(None), Some(90.0));
    }
}
