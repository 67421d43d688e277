//! Read-only reporting over the four stores.
//!
//! This module turns current store contents into:
//! - A combined stats snapshot
//! - Chart-ready series (drawing is left to a `ChartRenderer`)
//!
//! CSV tables are built in `export`.

use crate::goals::GoalRegistry;
use crate::health::HealthMetrics;
use crate::nutrition::MealLog;
use crate::types::{Goal, Macros, WeightRecord, WorkoutSummary};
use crate::workout::WorkoutLog;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Combined view across all stores
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    pub workout_summary: WorkoutSummary,
    pub daily_calories: f64,
    pub macro_totals: Macros,
    pub recent_weight: Option<WeightRecord>,
    pub goals: Vec<Goal>,
}

/// How a series is meant to be drawn
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

/// Labelled points plus the titles a renderer needs
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub points: Vec<(String, f64)>,
}

impl ChartSeries {
    fn new(
        title: &str,
        x_label: &str,
        y_label: &str,
        kind: ChartKind,
        points: Vec<(String, f64)>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            kind,
            points,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }
}

/// Something that can draw a chart series (plotting backend, terminal, ...)
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartSeries) -> Result<()>;
}

/// Borrowed view over the four stores
#[derive(Clone, Copy)]
pub struct Reporter<'a> {
    pub(crate) workouts: &'a WorkoutLog,
    pub(crate) meals: &'a MealLog,
    pub(crate) health: &'a HealthMetrics,
    pub(crate) goals: &'a GoalRegistry,
}

impl<'a> Reporter<'a> {
    pub fn new(
        workouts: &'a WorkoutLog,
        meals: &'a MealLog,
        health: &'a HealthMetrics,
        goals: &'a GoalRegistry,
    ) -> Self {
        Self {
            workouts,
            meals,
            health,
            goals,
        }
    }

    pub fn recent_stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            workout_summary: self.workouts.summary(),
            daily_calories: self.meals.daily_calories(),
            macro_totals: self.meals.macro_totals(),
            recent_weight: self.health.recent_weight().cloned(),
            goals: self.goals.view_all().to_vec(),
        }
    }

    /// Duration of each workout, by date (line)
    pub fn workout_chart(&self) -> Option<ChartSeries> {
        let workouts = self.workouts.list();
        if workouts.is_empty() {
            return None;
        }
        let points = workouts
            .iter()
            .map(|w| (w.date.clone(), w.duration))
            .collect();
        Some(ChartSeries::new(
            "Workout Duration Over Time",
            "Date",
            "Duration (min)",
            ChartKind::Line,
            points,
        ))
    }

    /// Calories burned per workout (bar)
    pub fn calorie_chart(&self) -> Option<ChartSeries> {
        let workouts = self.workouts.list();
        if workouts.is_empty() {
            return None;
        }
        let points = workouts
            .iter()
            .map(|w| (w.date.clone(), w.calories_burned))
            .collect();
        Some(ChartSeries::new(
            "Calories Burned Per Workout",
            "Date",
            "Calories Burned",
            ChartKind::Bar,
            points,
        ))
    }

    /// Macronutrient split (pie); always three slices, zero when no meals
    pub fn macronutrient_pie(&self) -> ChartSeries {
        let points = self
            .meals
            .macro_totals()
            .labelled()
            .iter()
            .map(|(label, grams)| (label.to_string(), *grams))
            .collect();
        ChartSeries::new(
            "Macronutrient Distribution",
            "",
            "",
            ChartKind::Pie,
            points,
        )
    }

    /// Weight readings in the order they were logged (line)
    pub fn weight_trend_chart(&self) -> Option<ChartSeries> {
        let weights = self.health.weight_trend();
        if weights.is_empty() {
            return None;
        }
        let points = weights
            .iter()
            .map(|r| (r.date.clone(), r.weight))
            .collect();
        Some(ChartSeries::new(
            "Weight Trend Over Time",
            "Date",
            "Weight (kg)",
            ChartKind::Line,
            points,
        ))
    }

    /// Heart rate readings in the order they were logged (line)
    pub fn heart_rate_chart(&self) -> Option<ChartSeries> {
        let readings = self.health.heart_rate_log();
        if readings.is_empty() {
            return None;
        }
        let points = readings
            .iter()
            .map(|r| (r.time.clone(), r.heart_rate))
            .collect();
        Some(ChartSeries::new(
            "Heart Rate Over Time",
            "Time",
            "Heart Rate",
            ChartKind::Line,
            points,
        ))
    }

    /// Total workout minutes per date, dates in first-seen order
    pub fn duration_by_date(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for workout in self.workouts.list() {
            match totals.iter().position(|(date, _)| *date == workout.date) {
                Some(index) => totals[index].1 += workout.duration,
                None => totals.push((workout.date.clone(), workout.duration)),
            }
        }
        totals
    }

    /// Daily totals (bar)
    pub fn weekly_summary_chart(&self) -> Option<ChartSeries> {
        let totals = self.duration_by_date();
        if totals.is_empty() {
            return None;
        }
        Some(ChartSeries::new(
            "Weekly Workout Summary",
            "Date",
            "Total Duration (min)",
            ChartKind::Bar,
            totals,
        ))
    }

    /// Progress against what is left for one goal (bar)
    pub fn goal_comparison(&self, goal_type: &str) -> Option<ChartSeries> {
        let goal = self.goals.get(goal_type)?;
        let points = vec![
            ("Progress".to_string(), goal.progress),
            ("Remaining".to_string(), goal.remaining()),
        ];
        Some(ChartSeries::new(
            &format!("Goal Progress for {}", goal_type),
            "",
            "",
            ChartKind::Bar,
            points,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stores {
        workouts: WorkoutLog,
        meals: MealLog,
        health: HealthMetrics,
        goals: GoalRegistry,
    }

    impl Stores {
        fn empty() -> Self {
            Self {
                workouts: WorkoutLog::new(),
                meals: MealLog::new(),
                health: HealthMetrics::new(),
                goals: GoalRegistry::new(),
            }
        }

        fn reporter(&self) -> Reporter<'_> {
            Reporter::new(&self.workouts, &self.meals, &self.health, &self.goals)
        }
    }

    /// Records every series it is asked to draw
    #[derive(Default)]
    struct RecordingRenderer {
        titles: Vec<String>,
    }

    impl ChartRenderer for RecordingRenderer {
        fn render(&mut self, chart: &ChartSeries) -> Result<()> {
            self.titles.push(chart.title.clone());
            Ok(())
        }
    }

    #[test]
    fn test_duration_by_date_groups_in_first_seen_order() {
        let mut stores = Stores::empty();
        stores.workouts.add("Run", 20.0, 200.0, Some("2024-01-01".into()));
        stores.workouts.add("Walk", 10.0, 50.0, Some("2024-01-01".into()));
        stores.workouts.add("Bike", 30.0, 250.0, Some("2024-01-02".into()));

        let totals = stores.reporter().duration_by_date();
        assert_eq!(
            totals,
            vec![
                ("2024-01-01".to_string(), 30.0),
                ("2024-01-02".to_string(), 30.0)
            ]
        );
    }

    #[test]
    fn test_grouping_keeps_first_seen_not_sorted_order() {
        let mut stores = Stores::empty();
        stores.workouts.add("A", 5.0, 0.0, Some("2024-02-03".into()));
        stores.workouts.add("B", 5.0, 0.0, Some("2024-02-01".into()));
        stores.workouts.add("C", 5.0, 0.0, Some("2024-02-03".into()));

        let chart = stores.reporter().weekly_summary_chart().unwrap();
        assert_eq!(chart.labels(), vec!["2024-02-03", "2024-02-01"]);
        assert_eq!(chart.values(), vec![10.0, 5.0]);
        assert_eq!(chart.kind, ChartKind::Bar);
    }

    #[test]
    fn test_empty_sources_have_no_chart() {
        let stores = Stores::empty();
        let reporter = stores.reporter();
        assert!(reporter.workout_chart().is_none());
        assert!(reporter.calorie_chart().is_none());
        assert!(reporter.weight_trend_chart().is_none());
        assert!(reporter.heart_rate_chart().is_none());
        assert!(reporter.weekly_summary_chart().is_none());
        assert!(reporter.goal_comparison("anything").is_none());

        let pie = reporter.macronutrient_pie();
        assert_eq!(pie.labels(), vec!["proteins", "fats", "carbs"]);
        assert_eq!(pie.values(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_series_values() {
        let mut stores = Stores::empty();
        stores.workouts.add("Run", 30.0, 300.0, Some("2024-01-01".into()));
        stores.workouts.add("Swim", 40.0, 350.0, Some("2024-01-03".into()));
        stores.meals.add("Bowl", 600.0, Macros::new(40.0, 20.0, 60.0));
        stores.health.log_weight(82.0, "2024-01-01");
        stores.health.log_weight(81.5, "2024-01-08");
        stores.health.log_heart_rate(64.0, "07:00");

        let reporter = stores.reporter();

        let durations = reporter.workout_chart().unwrap();
        assert_eq!(durations.labels(), vec!["2024-01-01", "2024-01-03"]);
        assert_eq!(durations.values(), vec![30.0, 40.0]);

        let calories = reporter.calorie_chart().unwrap();
        assert_eq!(calories.values(), vec![300.0, 350.0]);

        assert_eq!(reporter.macronutrient_pie().values(), vec![40.0, 20.0, 60.0]);

        let weights = reporter.weight_trend_chart().unwrap();
        assert_eq!(weights.values(), vec![82.0, 81.5]);

        let heart = reporter.heart_rate_chart().unwrap();
        assert_eq!(heart.labels(), vec!["07:00"]);
    }

    #[test]
    fn test_goal_comparison() {
        let mut stores = Stores::empty();
        stores.goals.set_goal("weight_loss", 10.0);
        stores.goals.update_progress("weight_loss", 3.0);

        let chart = stores.reporter().goal_comparison("weight_loss").unwrap();
        assert_eq!(chart.title, "Goal Progress for weight_loss");
        assert_eq!(chart.points[0], ("Progress".to_string(), 3.0));
        assert_eq!(chart.points[1], ("Remaining".to_string(), 7.0));
    }

    #[test]
    fn test_recent_stats_snapshot() {
        let mut stores = Stores::empty();
        stores.workouts.add("Run", 30.0, 300.0, Some("2024-01-01".into()));
        stores.meals.add("Eggs", 200.0, Macros::new(14.0, 10.0, 1.0));
        stores.health.log_weight(70.0, "2024-01-01");
        stores.goals.set_goal("run_km", 50.0);

        let snapshot = stores.reporter().recent_stats();
        assert_eq!(snapshot.workout_summary.total_workouts, 1);
        assert_eq!(snapshot.daily_calories, 200.0);
        assert_eq!(snapshot.macro_totals.proteins, 14.0);
        assert_eq!(snapshot.recent_weight.unwrap().weight, 70.0);
        assert_eq!(snapshot.goals.len(), 1);

        let empty = Stores::empty().reporter().recent_stats();
        assert!(empty.recent_weight.is_none());
        assert_eq!(empty.workout_summary.total_duration, 0.0);
    }

    #[test]
    fn test_renderer_receives_series() {
        crate::logging::init_test();
        let mut stores = Stores::empty();
        stores.workouts.add("Run", 30.0, 300.0, Some("2024-01-01".into()));

        let reporter = stores.reporter();
        let mut renderer = RecordingRenderer::default();
        for chart in [reporter.workout_chart(), reporter.weight_trend_chart()]
            .into_iter()
            .flatten()
        {
            renderer.render(&chart).unwrap();
        }
        renderer.render(&reporter.macronutrient_pie()).unwrap();

        assert_eq!(
            renderer.titles,
            vec!["Workout Duration Over Time", "Macronutrient Distribution"]
        );
    }
}
