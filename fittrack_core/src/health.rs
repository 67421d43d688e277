//! Body metrics: weight, height and heart-rate logs plus simple formulas.
//!
//! The body-fat and ideal-weight formulas are rough estimates, not
//! clinical models.

use crate::types::{HeartRateRecord, HeightRecord, WeightRecord};

/// BMI used when suggesting an ideal weight
const IDEAL_BMI: f64 = 22.0;

/// Append-only health readings
#[derive(Clone, Debug, Default)]
pub struct HealthMetrics {
    weight_log: Vec<WeightRecord>,
    height_log: Vec<HeightRecord>,
    heart_rate_log: Vec<HeartRateRecord>,
}

impl HealthMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body mass index from kilograms and meters
    ///
    /// Returns `None` when height is zero or negative.
    pub fn calculate_bmi(weight: f64, height: f64) -> Option<f64> {
        if height <= 0.0 {
            return None;
        }
        Some(weight / (height * height))
    }

    /// Estimated body-fat percentage
    ///
    /// "male" (any case) selects the male constant; every other value,
    /// including unrecognised ones, uses the female constant.
    pub fn calculate_body_fat_percentage(age: u32, gender: &str, bmi: f64) -> f64 {
        let base = 1.20 * bmi + 0.23 * f64::from(age);
        if gender.eq_ignore_ascii_case("male") {
            base - 16.2
        } else {
            base - 5.4
        }
    }

    /// Weight at a BMI of 22 for the given height in meters
    ///
    /// Age and gender are accepted for call compatibility but do not
    /// affect the result.
    pub fn suggest_ideal_weight(height: f64, _age: u32, _gender: &str) -> f64 {
        IDEAL_BMI * height * height
    }

    pub fn log_weight(&mut self, weight: f64, date: impl Into<String>) {
        let record = WeightRecord {
            weight,
            date: date.into(),
        };
        tracing::debug!("Logged weight {} kg on {}", record.weight, record.date);
        self.weight_log.push(record);
    }

    pub fn log_height(&mut self, height: f64, date: impl Into<String>) {
        let record = HeightRecord {
            height,
            date: date.into(),
        };
        tracing::debug!("Logged height {} m on {}", record.height, record.date);
        self.height_log.push(record);
    }

    pub fn log_heart_rate(&mut self, heart_rate: f64, time: impl Into<String>) {
        let record = HeartRateRecord {
            heart_rate,
            time: time.into(),
        };
        tracing::debug!("Logged heart rate {} bpm at {}", record.heart_rate, record.time);
        self.heart_rate_log.push(record);
    }

    /// Last weight appended, regardless of its date string
    pub fn recent_weight(&self) -> Option<&WeightRecord> {
        self.weight_log.last()
    }

    /// Every weight reading in insertion order
    pub fn weight_trend(&self) -> &[WeightRecord] {
        &self.weight_log
    }

    pub fn height_log(&self) -> &[HeightRecord] {
        &self.height_log
    }

    pub fn heart_rate_log(&self) -> &[HeartRateRecord] {
        &self.heart_rate_log
    }

    /// Mean of all logged heart rates, `None` if nothing is logged
    ///
    /// The duration window is accepted but not applied yet; the mean
    /// always covers the whole log.
    pub fn average_heart_rate(&self, _duration: Option<f64>) -> Option<f64> {
        if self.heart_rate_log.is_empty() {
            return None;
        }
        let total: f64 = self.heart_rate_log.iter().map(|r| r.heart_rate).sum();
        Some(total / self.heart_rate_log.len() as f64)
    }

    /// Clear all three logs
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::info!("Health metrics reset");
    }
}
