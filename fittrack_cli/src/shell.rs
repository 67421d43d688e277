//! Interactive numbered-menu shell.
//!
//! Reads commands line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so the whole loop can be driven from a script.
//! End of input leaves the shell cleanly from any menu.

use crate::chart::TextChart;
use crate::session::Session;
use fittrack_core::{
    ChartRenderer, ChartSeries, Error, ExportCategory, ExportOutcome, HealthMetrics, Macros,
    Result,
};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

const MAIN_MENU: &[&str] = &[
    "Workout Tracker",
    "Nutrition Tracker",
    "Health Metrics",
    "Fitness Goals",
    "Data Visualization",
    "Exit",
];

const WORKOUT_MENU: &[&str] = &[
    "Add Workout",
    "Remove Workout",
    "View Workouts",
    "Calculate Total Duration",
    "Calculate Total Calories",
    "Get Workout by Date",
    "Suggest Workout",
    "Generate Weekly Plan",
    "Get Workout Summary",
    "Reset Tracker",
    "Back to Main Menu",
];

const NUTRITION_MENU: &[&str] = &[
    "Add Meal",
    "Remove Meal",
    "View Daily Meals",
    "Calculate Daily Calories",
    "Track Macronutrients",
    "Suggest Meal",
    "Set Daily Calorie Goal",
    "Get Remaining Calories",
    "Generate Grocery List",
    "Reset Tracker",
    "Back to Main Menu",
];

const HEALTH_MENU: &[&str] = &[
    "Calculate BMI",
    "Calculate Body Fat Percentage",
    "Log Weight",
    "Log Height",
    "Get Recent Weight",
    "Get Weight Trend",
    "Suggest Ideal Weight",
    "Log Heart Rate",
    "Get Average Heart Rate",
    "Reset Metrics",
    "Back to Main Menu",
];

const GOALS_MENU: &[&str] = &[
    "Set Goal",
    "Get Goal Progress",
    "Update Goal Progress",
    "Get Remaining Goal",
    "Suggest Steps to Goal",
    "Generate Progress Report",
    "Set Deadline",
    "Adjust Goal",
    "View All Goals",
    "Reset All Goals",
    "Back to Main Menu",
];

const VISUALIZATION_MENU: &[&str] = &[
    "Generate Workout Chart",
    "Generate Calorie Chart",
    "Generate Macronutrient Pie",
    "Generate Weight Trend Line",
    "Compare Goal Progress",
    "Export Data CSV",
    "View Recent Stats",
    "Visualize Heart Rate",
    "Create Weekly Summary Chart",
    "Reset Visualizations",
    "Back to Main Menu",
];

enum Flow {
    Stay,
    Back,
}

pub struct Shell<R, W> {
    input: R,
    out: W,
    session: Session,
    export_dir: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, session: Session, export_dir: PathBuf) -> Self {
        Self {
            input,
            out,
            session,
            export_dir,
        }
    }

    /// Run the main menu until "Exit" or end of input
    pub fn run(&mut self) -> Result<()> {
        match self.main_loop() {
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!("Input closed, leaving shell");
                writeln!(self.out)?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self) -> Result<()> {
        loop {
            self.print_menu("=== FitTrack Main Menu ===", MAIN_MENU)?;
            let choice = self.prompt("Select an option: ")?;
            match choice.as_str() {
                "1" => self.menu_loop(
                    "--- Workout Tracker Menu ---",
                    WORKOUT_MENU,
                    Self::workout_action,
                )?,
                "2" => self.menu_loop(
                    "--- Nutrition Tracker Menu ---",
                    NUTRITION_MENU,
                    Self::nutrition_action,
                )?,
                "3" => self.menu_loop(
                    "--- Health Metrics Menu ---",
                    HEALTH_MENU,
                    Self::health_action,
                )?,
                "4" => self.menu_loop(
                    "--- Fitness Goals Menu ---",
                    GOALS_MENU,
                    Self::goals_action,
                )?,
                "5" => self.menu_loop(
                    "--- Data Visualization Menu ---",
                    VISUALIZATION_MENU,
                    Self::visualization_action,
                )?,
                "6" => {
                    writeln!(self.out, "Exiting FitTrack. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "{}", INVALID_CHOICE)?,
            }
        }
    }

    fn menu_loop(
        &mut self,
        title: &str,
        options: &[&str],
        action: fn(&mut Self, &str) -> Result<Flow>,
    ) -> Result<()> {
        loop {
            self.print_menu(title, options)?;
            let choice = self.prompt("Select an option: ")?;
            if let Flow::Back = action(self, &choice)? {
                return Ok(());
            }
        }
    }

    fn workout_action(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let name = self.prompt("Enter workout name: ")?;
                let duration = self.prompt_f64("Enter duration in minutes: ")?;
                let calories = self.prompt_f64("Enter calories burned: ")?;
                let date = self.prompt("Enter date (YYYY-MM-DD) or leave blank for today: ")?;
                let date = if date.is_empty() { None } else { Some(date) };
                let entry = self.session.workouts.add(name, duration, calories, date);
                self.print_json("Workout added:", &entry)?;
            }
            "2" => {
                let id = self.prompt_u64("Enter workout id to remove: ")?;
                self.session.workouts.remove(id);
                writeln!(self.out, "Workout removed.")?;
            }
            "3" => {
                let workouts = self.session.workouts.list().to_vec();
                self.print_json("Workouts:", &workouts)?;
            }
            "4" => {
                let total = self.session.workouts.total_duration();
                writeln!(self.out, "Total Duration: {}", total)?;
            }
            "5" => {
                let total = self.session.workouts.total_calories();
                writeln!(self.out, "Total Calories Burned: {}", total)?;
            }
            "6" => {
                let date = self.prompt("Enter date (YYYY-MM-DD): ")?;
                let matches: Vec<_> = self
                    .session
                    .workouts
                    .by_date(&date)
                    .into_iter()
                    .cloned()
                    .collect();
                self.print_json(&format!("Workouts on {}:", date), &matches)?;
            }
            "7" => {
                let goal_type = self.prompt("Enter goal type (cardio, strength, flexibility): ")?;
                let suggestion = self.session.workouts.suggest_workout(&goal_type);
                writeln!(self.out, "Workout suggestion: {}", suggestion)?;
            }
            "8" => {
                let goal_type = self.prompt("Enter goal type for weekly plan: ")?;
                let plan = self.session.workouts.weekly_plan(&goal_type);
                self.print_json("Weekly Plan:", &plan)?;
            }
            "9" => {
                let summary = self.session.workouts.summary();
                self.print_json("Workout Summary:", &summary)?;
            }
            "10" => {
                self.session.workouts.reset();
                writeln!(self.out, "Workout tracker reset.")?;
            }
            "11" => return Ok(Flow::Back),
            _ => writeln!(self.out, "{}", INVALID_CHOICE)?,
        }
        Ok(Flow::Stay)
    }

    fn nutrition_action(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let name = self.prompt("Enter meal name: ")?;
                let calories = self.prompt_f64("Enter calories: ")?;
                let proteins = self.prompt_f64("Enter proteins (g): ")?;
                let fats = self.prompt_f64("Enter fats (g): ")?;
                let carbs = self.prompt_f64("Enter carbs (g): ")?;
                let entry = self
                    .session
                    .meals
                    .add(name, calories, Macros::new(proteins, fats, carbs));
                self.print_json("Meal added:", &entry)?;
            }
            "2" => {
                let id = self.prompt_u64("Enter meal id to remove: ")?;
                self.session.meals.remove(id);
                writeln!(self.out, "Meal removed.")?;
            }
            "3" => {
                let meals = self.session.meals.list().to_vec();
                self.print_json("Daily Meals:", &meals)?;
            }
            "4" => {
                let total = self.session.meals.daily_calories();
                writeln!(self.out, "Daily Calorie Consumption: {}", total)?;
            }
            "5" => {
                let totals = self.session.meals.macro_totals();
                self.print_json("Macronutrient Totals:", &totals)?;
            }
            "6" => {
                let target = self.prompt_f64("Enter target calories: ")?;
                let suggestion = self.session.meals.suggest_meal(target);
                self.print_json("Meal suggestion:", suggestion)?;
            }
            "7" => {
                let goal = self.prompt_f64("Enter daily calorie goal: ")?;
                self.session.meals.set_calorie_goal(goal);
                writeln!(self.out, "Daily calorie goal set.")?;
            }
            "8" => {
                let remaining = self.session.meals.remaining_calories();
                writeln!(self.out, "Remaining Calories: {}", remaining)?;
            }
            "9" => {
                let plan = self.prompt("Enter meal plan as comma-separated meal names: ")?;
                let groceries = self.session.meals.grocery_list(plan.split(',').map(str::trim));
                self.print_json("Grocery List:", &groceries)?;
            }
            "10" => {
                self.session.meals.reset();
                writeln!(self.out, "Nutrition tracker reset.")?;
            }
            "11" => return Ok(Flow::Back),
            _ => writeln!(self.out, "{}", INVALID_CHOICE)?,
        }
        Ok(Flow::Stay)
    }

    fn health_action(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let weight = self.prompt_f64("Enter weight (kg): ")?;
                let height = self.prompt_f64("Enter height (m): ")?;
                match HealthMetrics::calculate_bmi(weight, height) {
                    Some(bmi) => writeln!(self.out, "BMI: {}", bmi)?,
                    None => writeln!(self.out, "BMI: undefined (height must be positive)")?,
                }
            }
            "2" => {
                let age = self.prompt_u32("Enter age: ")?;
                let gender = self.prompt("Enter gender (male/female): ")?;
                let weight = self.prompt_f64("Enter weight (kg): ")?;
                let height = self.prompt_f64("Enter height (m): ")?;
                match HealthMetrics::calculate_bmi(weight, height) {
                    Some(bmi) => {
                        let body_fat =
                            HealthMetrics::calculate_body_fat_percentage(age, &gender, bmi);
                        writeln!(self.out, "Body Fat Percentage: {}", body_fat)?;
                    }
                    None => writeln!(
                        self.out,
                        "Body Fat Percentage: undefined (height must be positive)"
                    )?,
                }
            }
            "3" => {
                let weight = self.prompt_f64("Enter weight (kg): ")?;
                let date = self.prompt("Enter date (YYYY-MM-DD): ")?;
                self.session.health.log_weight(weight, date);
                writeln!(self.out, "Weight logged.")?;
            }
            "4" => {
                let height = self.prompt_f64("Enter height (m): ")?;
                let date = self.prompt("Enter date (YYYY-MM-DD): ")?;
                self.session.health.log_height(height, date);
                writeln!(self.out, "Height logged.")?;
            }
            "5" => match self.session.health.recent_weight().cloned() {
                Some(record) => self.print_json("Recent Weight:", &record)?,
                None => writeln!(self.out, "Recent Weight: none")?,
            },
            "6" => {
                let trend = self.session.health.weight_trend().to_vec();
                self.print_json("Weight Trend:", &trend)?;
            }
            "7" => {
                let height = self.prompt_f64("Enter height (m): ")?;
                let age = self.prompt_u32("Enter age: ")?;
                let gender = self.prompt("Enter gender (male/female): ")?;
                let ideal = HealthMetrics::suggest_ideal_weight(height, age, &gender);
                writeln!(self.out, "Suggested Ideal Weight: {}", ideal)?;
            }
            "8" => {
                let heart_rate = self.prompt_f64("Enter heart rate: ")?;
                let time = self.prompt("Enter time (HH:MM): ")?;
                self.session.health.log_heart_rate(heart_rate, time);
                writeln!(self.out, "Heart rate logged.")?;
            }
            "9" => match self.session.health.average_heart_rate(None) {
                Some(avg) => writeln!(self.out, "Average Heart Rate: {}", avg)?,
                None => writeln!(self.out, "Average Heart Rate: undefined (no heart rate data)")?,
            },
            "10" => {
                self.session.health.reset();
                writeln!(self.out, "Health metrics reset.")?;
            }
            "11" => return Ok(Flow::Back),
            _ => writeln!(self.out, "{}", INVALID_CHOICE)?,
        }
        Ok(Flow::Stay)
    }

    fn goals_action(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let goal_type = self.prompt("Enter goal type: ")?;
                let target = self.prompt_f64("Enter target: ")?;
                self.session.goals.set_goal(goal_type, target);
                writeln!(self.out, "Goal set.")?;
            }
            "2" => {
                let progress = self.session.goals.progress();
                self.print_json("Goal Progress:", &progress)?;
            }
            "3" => {
                let goal_type = self.prompt("Enter goal type: ")?;
                let delta = self.prompt_f64("Enter progress to add: ")?;
                self.session.goals.update_progress(&goal_type, delta);
                writeln!(self.out, "Goal progress updated.")?;
            }
            "4" => {
                let goal_type = self.prompt("Enter goal type: ")?;
                match self.session.goals.remaining(&goal_type) {
                    Some(remaining) => {
                        writeln!(self.out, "Remaining for {}: {}", goal_type, remaining)?
                    }
                    None => writeln!(
                        self.out,
                        "Remaining for {}: none (goal not found)",
                        goal_type
                    )?,
                }
            }
            "5" => {
                let goal_type = self.prompt("Enter goal type: ")?;
                match self.session.goals.suggest_daily_steps(&goal_type) {
                    Some(steps) => writeln!(self.out, "Suggested Steps per Day: {}", steps)?,
                    None => writeln!(self.out, "Suggested Steps per Day: none (goal not found)")?,
                }
            }
            "6" => {
                let report = self.session.goals.progress_report();
                self.print_json("Progress Report:", &report)?;
            }
            "7" => {
                let goal_type = self.prompt("Enter goal type: ")?;
                let deadline = self.prompt("Enter deadline (YYYY-MM-DD): ")?;
                self.session.goals.set_deadline(&goal_type, deadline);
                writeln!(self.out, "Deadline set.")?;
            }
            "8" => {
                let goal_type = self.prompt("Enter goal type: ")?;
                let target = self.prompt_f64("Enter new target: ")?;
                self.session.goals.adjust_goal(&goal_type, target);
                writeln!(self.out, "Goal adjusted.")?;
            }
            "9" => {
                let goals = self.session.goals.view_all().to_vec();
                self.print_json("All Goals:", &goals)?;
            }
            "10" => {
                self.session.goals.reset_all();
                writeln!(self.out, "All goals reset.")?;
            }
            "11" => return Ok(Flow::Back),
            _ => writeln!(self.out, "{}", INVALID_CHOICE)?,
        }
        Ok(Flow::Stay)
    }

    fn visualization_action(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let chart = self.session.reporter().workout_chart();
                self.show_chart(chart, "No workout data available.")?;
            }
            "2" => {
                let chart = self.session.reporter().calorie_chart();
                self.show_chart(chart, "No workout data available.")?;
            }
            "3" => {
                let chart = self.session.reporter().macronutrient_pie();
                self.show_chart(Some(chart), "")?;
            }
            "4" => {
                let chart = self.session.reporter().weight_trend_chart();
                self.show_chart(chart, "No weight data available.")?;
            }
            "5" => {
                let goal_type = self.prompt("Enter goal type to compare: ")?;
                let chart = self.session.reporter().goal_comparison(&goal_type);
                self.show_chart(chart, "Goal type not found.")?;
            }
            "6" => {
                writeln!(self.out, "Data types available: workout, nutrition, health, goals")?;
                let name = self.prompt("Enter data type: ")?;
                self.export(&name)?;
            }
            "7" => {
                let stats = self.session.reporter().recent_stats();
                let json = serde_json::to_string_pretty(&stats)?;
                writeln!(self.out, "Recent Stats:\n{}", json)?;
            }
            "8" => {
                let chart = self.session.reporter().heart_rate_chart();
                self.show_chart(chart, "No heart rate data available.")?;
            }
            "9" => {
                let chart = self.session.reporter().weekly_summary_chart();
                self.show_chart(chart, "No workout data available.")?;
            }
            // Charts are drawn on demand, so there is nothing cached to clear
            "10" => writeln!(self.out, "Visualizations reset.")?,
            "11" => return Ok(Flow::Back),
            _ => writeln!(self.out, "{}", INVALID_CHOICE)?,
        }
        Ok(Flow::Stay)
    }

    fn export(&mut self, name: &str) -> Result<()> {
        let category = match name.parse::<ExportCategory>() {
            Ok(category) => category,
            Err(Error::UnknownCategory(_)) => {
                writeln!(self.out, "Invalid data type.")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match self
            .session
            .reporter()
            .export_csv(category, &self.export_dir)?
        {
            ExportOutcome::Written { path, .. } => {
                writeln!(self.out, "Data exported to {}", path.display())?
            }
            ExportOutcome::NothingToExport => writeln!(self.out, "No data available to export.")?,
        }
        Ok(())
    }

    fn show_chart(&mut self, chart: Option<ChartSeries>, empty_message: &str) -> Result<()> {
        match chart {
            Some(chart) => TextChart::new(&mut self.out).render(&chart),
            None => {
                writeln!(self.out, "{}", empty_message)?;
                Ok(())
            }
        }
    }

    fn print_menu(&mut self, title: &str, options: &[&str]) -> Result<()> {
        writeln!(self.out, "\n{}", title)?;
        for (index, option) in options.iter().enumerate() {
            writeln!(self.out, "{}. {}", index + 1, option)?;
        }
        Ok(())
    }

    fn print_json<T: Serialize + ?Sized>(&mut self, label: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        writeln!(self.out, "{} {}", label, json)?;
        Ok(())
    }

    /// Read one trimmed line; end of input is an `UnexpectedEof` error
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim().to_string())
    }

    /// Re-prompt until the line parses
    fn prompt_parsed<T: std::str::FromStr>(&mut self, message: &str, kind: &str) -> Result<T> {
        loop {
            let line = self.prompt(message)?;
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.out, "Please enter a valid {}.", kind)?,
            }
        }
    }

    fn prompt_f64(&mut self, message: &str) -> Result<f64> {
        loop {
            let value: f64 = self.prompt_parsed(message, "number")?;
            if value.is_finite() {
                return Ok(value);
            }
            writeln!(self.out, "Please enter a valid number.")?;
        }
    }

    fn prompt_u64(&mut self, message: &str) -> Result<u64> {
        self.prompt_parsed(message, "whole number")
    }

    fn prompt_u32(&mut self, message: &str) -> Result<u32> {
        self.prompt_parsed(message, "whole number")
    }
}
