//! Planner configuration.
//!
//! Tunables that are product decisions rather than student input: scan
//! granularity, meal windows, and input limits. Every field has a default,
//! so a JSON override only needs the fields it changes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DayMinute, MINUTES_PER_DAY};

/// A meal taken at a fixed approximate time each day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealWindow {
    /// Display label, e.g. `"Lunch"`.
    pub label: String,
    /// Nominal start (minutes since midnight).
    pub start: DayMinute,
    /// Length in minutes.
    pub duration: DayMinute,
}

impl MealWindow {
    /// Creates a new meal window.
    pub fn new(label: impl Into<String>, start: DayMinute, duration: DayMinute) -> Self {
        Self {
            label: label.into(),
            start,
            duration,
        }
    }

    /// Whether the window is non-empty and ends within two days of midnight.
    pub fn is_well_formed(&self) -> bool {
        self.duration > 0
            && self
                .start
                .checked_add(self.duration)
                .is_some_and(|end| end <= 2 * MINUTES_PER_DAY)
    }
}

/// Accepted ranges for routine fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    /// Maximum number of subjects.
    pub max_subjects: usize,
    /// Maximum subject name length (characters).
    pub max_subject_name_len: usize,
    /// Minimum total study minutes.
    pub min_study_minutes: u32,
    /// Maximum total study minutes.
    pub max_study_minutes: u32,
    /// Minimum short break.
    pub min_break_minutes: u32,
    /// Maximum short break.
    pub max_break_minutes: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_subjects: 8,
            max_subject_name_len: 40,
            min_study_minutes: 60,
            max_study_minutes: 720,
            min_break_minutes: 5,
            max_break_minutes: 30,
        }
    }
}

/// Planner configuration.
///
/// # Example
///
/// ```
/// use study_schedule::config::PlannerConfig;
///
/// let config = PlannerConfig::from_json(r#"{"granularity_minutes": 10}"#).unwrap();
/// assert_eq!(config.granularity_minutes, 10);
/// assert_eq!(config.meals.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Cursor step when the scan hits an occupied or too-short slot.
    pub granularity_minutes: DayMinute,
    /// Daily meals, in order.
    pub meals: Vec<MealWindow>,
    /// Input limits enforced by validation.
    pub limits: InputLimits,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            granularity_minutes: 15,
            meals: vec![
                MealWindow::new("Breakfast", 7 * 60 + 30, 30),
                MealWindow::new("Lunch", 13 * 60, 30),
                MealWindow::new("Dinner", 20 * 60, 30),
            ],
            limits: InputLimits::default(),
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON; missing fields keep their defaults.
    ///
    /// # Errors
    /// [`PlanError::Config`](crate::error::PlanError::Config) for malformed
    /// JSON or a meal window that is empty or runs past the second day.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        if let Some(meal) = config.meals.iter().find(|m| !m.is_well_formed()) {
            let err: serde_json::Error = serde::de::Error::custom(format!(
                "meal {:?} has start {} and duration {}",
                meal.label, meal.start, meal.duration
            ));
            return Err(err.into());
        }
        if config.granularity_minutes == 0 {
            tracing::warn!("granularity_minutes is 0, using 1");
            config.granularity_minutes = 1;
        }
        Ok(config)
    }

    /// Sets the scan granularity (at least one minute).
    pub fn with_granularity(mut self, minutes: DayMinute) -> Self {
        self.granularity_minutes = minutes.max(1);
        self
    }

    /// Replaces the meal windows.
    pub fn with_meals(mut self, meals: Vec<MealWindow>) -> Self {
        self.meals = meals;
        self
    }

    /// Replaces the input limits.
    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }
}
