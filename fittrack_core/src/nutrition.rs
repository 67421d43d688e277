//! Meal log with calorie goal tracking.

use crate::catalog::get_default_catalog;
use crate::types::{Macros, MealEntry, MealSuggestion};
use std::collections::BTreeSet;

/// In-memory log of meals, kept in insertion order
#[derive(Clone, Debug)]
pub struct MealLog {
    meals: Vec<MealEntry>,
    next_id: u64,
    daily_calorie_goal: f64,
}

impl Default for MealLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MealLog {
    pub fn new() -> Self {
        Self {
            meals: Vec::new(),
            next_id: 1,
            daily_calorie_goal: 0.0,
        }
    }

    /// Log a meal and return the stored entry
    pub fn add(
        &mut self,
        meal_name: impl Into<String>,
        calories: f64,
        macros: Macros,
    ) -> MealEntry {
        let entry = MealEntry {
            id: self.next_id,
            meal_name: meal_name.into(),
            calories,
            macros,
        };
        self.next_id += 1;
        self.meals.push(entry.clone());

        tracing::debug!("Logged meal {} ({}, {} kcal)", entry.id, entry.meal_name, calories);
        entry
    }

    /// Remove a meal by id; unknown ids are ignored
    pub fn remove(&mut self, id: u64) {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != id);
        if self.meals.len() == before {
            tracing::debug!("No meal with id {} to remove", id);
        } else {
            tracing::debug!("Removed meal {}", id);
        }
    }

    pub fn list(&self) -> &[MealEntry] {
        &self.meals
    }

    pub fn daily_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.calories).sum()
    }

    pub fn macro_totals(&self) -> Macros {
        self.meals.iter().fold(Macros::default(), |mut total, meal| {
            total += meal.macros;
            total
        })
    }

    /// Catalog meal with calories closest to the target
    ///
    /// Ties go to the meal listed first in the catalog.
    pub fn suggest_meal(&self, target_calories: f64) -> &'static MealSuggestion {
        let meals = &get_default_catalog().meals;
        meals
            .iter()
            .min_by(|a, b| {
                let da = (a.calories - target_calories).abs();
                let db = (b.calories - target_calories).abs();
                da.total_cmp(&db)
            })
            .expect("default catalog has meal suggestions")
    }

    pub fn set_calorie_goal(&mut self, goal: f64) {
        self.daily_calorie_goal = goal;
        tracing::debug!("Daily calorie goal set to {}", goal);
    }

    pub fn calorie_goal(&self) -> f64 {
        self.daily_calorie_goal
    }

    /// Goal minus consumed; negative once the goal is exceeded
    pub fn remaining_calories(&self) -> f64 {
        self.daily_calorie_goal - self.daily_calories()
    }

    /// Union of ingredients for the named meals
    ///
    /// Unknown meal names contribute nothing.
    pub fn grocery_list<I, S>(&self, meal_names: I) -> BTreeSet<&'static str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let catalog = get_default_catalog();
        meal_names
            .into_iter()
            .flat_map(|name| catalog.ingredients_for(name.as_ref()).iter().copied())
            .collect()
    }

    /// Clear all meals, the calorie goal, and restart ids at 1
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("Meal log reset");
    }
}
