#![forbid(unsafe_code)]

//! Core domain model and business logic for FitTrack.
//!
//! This crate provides:
//! - Domain types (workouts, meals, body readings, goals)
//! - Four in-memory stores with summary queries
//! - Built-in suggestion catalogs
//! - Reporting (stats snapshot, chart series) and CSV export
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod workout;
pub mod nutrition;
pub mod health;
pub mod goals;
pub mod report;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{get_default_catalog, Catalog};
pub use config::Config;
pub use workout::WorkoutLog;
pub use nutrition::MealLog;
pub use health::HealthMetrics;
pub use goals::GoalRegistry;
pub use report::{ChartKind, ChartRenderer, ChartSeries, Reporter, StatsSnapshot};
pub use export::{ExportCategory, ExportOutcome};
