//! Built-in lookup tables for suggestions and grocery lists.
//!
//! The tables are built once and shared read-only by every store instance.

use crate::types::MealSuggestion;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Suggestion returned for goal types with no dedicated workout
pub const GENERAL_FITNESS: &str = "General Fitness";

/// Read-only lookup tables
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Lower-cased goal type -> suggested workout
    pub workouts: HashMap<&'static str, &'static str>,
    /// Suggestion meals, in tie-break order
    pub meals: Vec<MealSuggestion>,
    /// Meal name -> ingredients
    pub groceries: HashMap<&'static str, Vec<&'static str>>,
}

/// Cached default catalog
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// Prefer `get_default_catalog()`; this is kept for tests and custom catalogs.
pub fn build_default_catalog() -> Catalog {
    let mut workouts = HashMap::new();
    workouts.insert("cardio", "Running");
    workouts.insert("strength", "Weight lifting");
    workouts.insert("flexibility", "Yoga");

    let meals = vec![
        MealSuggestion {
            meal_name: "Grilled Chicken Salad".into(),
            calories: 350.0,
        },
        MealSuggestion {
            meal_name: "Veggie Wrap".into(),
            calories: 300.0,
        },
        MealSuggestion {
            meal_name: "Protein Smoothie".into(),
            calories: 250.0,
        },
    ];

    let mut groceries = HashMap::new();
    groceries.insert(
        "Grilled Chicken Salad",
        vec!["chicken breast", "lettuce", "tomatoes", "cucumber"],
    );
    groceries.insert(
        "Veggie Wrap",
        vec!["tortilla", "spinach", "bell peppers", "hummus"],
    );
    groceries.insert(
        "Protein Smoothie",
        vec!["protein powder", "banana", "almond milk"],
    );

    Catalog {
        workouts,
        meals,
        groceries,
    }
}

impl Catalog {
    /// Workout for a goal type, matched case-insensitively
    pub fn workout_for(&self, goal_type: &str) -> &'static str {
        self.workouts
            .get(goal_type.to_lowercase().as_str())
            .copied()
            .unwrap_or(GENERAL_FITNESS)
    }

    /// Ingredients for a meal name (exact match); empty for unknown meals
    pub fn ingredients_for(&self, meal_name: &str) -> &[&'static str] {
        self.groceries
            .get(meal_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (goal_type, workout) in &self.workouts {
            if goal_type.is_empty() || workout.is_empty() {
                errors.push("Workout suggestion has empty key or name".to_string());
            }
            if *goal_type != goal_type.to_lowercase() {
                errors.push(format!(
                    "Workout suggestion key '{}' must be lower case",
                    goal_type
                ));
            }
        }

        if self.meals.is_empty() {
            errors.push("Catalog has no meal suggestions".to_string());
        }

        for meal in &self.meals {
            if meal.meal_name.is_empty() {
                errors.push("Meal suggestion has empty name".to_string());
            }
            if !meal.calories.is_finite() || meal.calories < 0.0 {
                errors.push(format!(
                    "Meal '{}' has invalid calories {}",
                    meal.meal_name, meal.calories
                ));
            }
            if !self.groceries.contains_key(meal.meal_name.as_str()) {
                errors.push(format!(
                    "Meal '{}' has no grocery entry",
                    meal.meal_name
                ));
            }
        }

        for (meal, items) in &self.groceries {
            if items.iter().any(|item| item.is_empty()) {
                errors.push(format!("Grocery list for '{}' has an empty item", meal));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_validates() {
        let errors = get_default_catalog().validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_workout_lookup_ignores_case() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.workout_for("CarDio"), "Running");
        assert_eq!(catalog.workout_for("strength"), "Weight lifting");
        assert_eq!(catalog.workout_for("balance"), GENERAL_FITNESS);
    }

    #[test]
    fn test_ingredients_are_case_sensitive() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.ingredients_for("Veggie Wrap").len(), 4);
        assert!(catalog.ingredients_for("veggie wrap").is_empty());
    }

    #[test]
    fn test_missing_grocery_entry_is_reported() {
        let mut catalog = build_default_catalog();
        catalog.groceries.remove("Protein Smoothie");
        let errors = catalog.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Protein Smoothie"));
    }
}
