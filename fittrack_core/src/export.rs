//! CSV export of store contents.
//!
//! One table per data category, one row per record. Empty categories are
//! reported as `NothingToExport` and never produce a file.

use crate::report::Reporter;
use crate::types::{Goal, MealEntry};
use crate::{Error, Result};
use fs2::FileExt;
use serde::Serialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Data categories that can be exported
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportCategory {
    Workout,
    Nutrition,
    Health,
    Goals,
}

impl ExportCategory {
    pub const ALL: [ExportCategory; 4] = [
        ExportCategory::Workout,
        ExportCategory::Nutrition,
        ExportCategory::Health,
        ExportCategory::Goals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportCategory::Workout => "workout",
            ExportCategory::Nutrition => "nutrition",
            ExportCategory::Health => "health",
            ExportCategory::Goals => "goals",
        }
    }

    /// `<category>_data.csv`
    pub fn file_name(&self) -> String {
        format!("{}_data.csv", self.as_str())
    }
}

impl fmt::Display for ExportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "workout" => Ok(ExportCategory::Workout),
            "nutrition" => Ok(ExportCategory::Nutrition),
            "health" => Ok(ExportCategory::Health),
            "goals" => Ok(ExportCategory::Goals),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Result of an export request
#[derive(Clone, Debug, PartialEq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    NothingToExport,
}

/// Meal row with macros flattened into their own columns
#[derive(Debug, Serialize)]
struct NutritionRow<'a> {
    id: u64,
    meal_name: &'a str,
    calories: f64,
    proteins: f64,
    fats: f64,
    carbs: f64,
}

impl<'a> From<&'a MealEntry> for NutritionRow<'a> {
    fn from(meal: &'a MealEntry) -> Self {
        NutritionRow {
            id: meal.id,
            meal_name: &meal.meal_name,
            calories: meal.calories,
            proteins: meal.macros.proteins,
            fats: meal.macros.fats,
            carbs: meal.macros.carbs,
        }
    }
}

/// Goal row; the goal type stays as an explicit column
#[derive(Debug, Serialize)]
struct GoalRow<'a> {
    goal_type: &'a str,
    target: f64,
    progress: f64,
    deadline: Option<&'a str>,
}

impl<'a> From<&'a Goal> for GoalRow<'a> {
    fn from(goal: &'a Goal) -> Self {
        GoalRow {
            goal_type: &goal.goal_type,
            target: goal.target,
            progress: goal.progress,
            deadline: goal.deadline.as_deref(),
        }
    }
}

/// Serialize rows to CSV with a header taken from the row's field names
fn rows_to_csv<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<(String, usize)> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }
    writer.flush()?;

    let bytes = writer.into_inner().map_err(std::io::Error::other)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok((text, count))
}

impl<'a> Reporter<'a> {
    /// Render one category as CSV text
    ///
    /// Returns `None` when the category has no records.
    pub fn csv_table(&self, category: ExportCategory) -> Result<Option<(String, usize)>> {
        let table = match category {
            ExportCategory::Workout => {
                let workouts = self.workouts.list();
                if workouts.is_empty() {
                    return Ok(None);
                }
                rows_to_csv(workouts)?
            }
            ExportCategory::Nutrition => {
                let meals = self.meals.list();
                if meals.is_empty() {
                    return Ok(None);
                }
                rows_to_csv(meals.iter().map(NutritionRow::from))?
            }
            ExportCategory::Health => {
                let weights = self.health.weight_trend();
                if weights.is_empty() {
                    return Ok(None);
                }
                rows_to_csv(weights)?
            }
            ExportCategory::Goals => {
                let goals = self.goals.view_all();
                if goals.is_empty() {
                    return Ok(None);
                }
                rows_to_csv(goals.iter().map(GoalRow::from))?
            }
        };
        Ok(Some(table))
    }

    /// Write `<category>_data.csv` into `dir`
    ///
    /// The directory is created if needed. The file is written under an
    /// exclusive lock and synced before returning.
    pub fn export_csv(&self, category: ExportCategory, dir: &Path) -> Result<ExportOutcome> {
        let (text, rows) = match self.csv_table(category)? {
            Some(table) => table,
            None => {
                tracing::info!("No {} data available to export", category);
                return Ok(ExportOutcome::NothingToExport);
            }
        };

        std::fs::create_dir_all(dir)?;
        let path = dir.join(category.file_name());

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)?;

        file.lock_exclusive()?;
        // Truncate only once we hold the lock
        file.set_len(0)?;
        {
            let mut writer = std::io::BufWriter::new(&file);
            writer.write_all(text.as_bytes())?;
            writer.flush()?;
        }
        file.sync_all()?;
        file.unlock()?;

        tracing::info!("Exported {} {} rows to {:?}", rows, category, path);
        Ok(ExportOutcome::Written { path, rows })
    }
}
