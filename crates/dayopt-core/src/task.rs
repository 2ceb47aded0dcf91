//! Task model for the daily optimizer.
//!
//! A task is an immutable record of user entry: a name, an estimated time
//! cost in hours, an importance rating from 1 to 5, and a category. The
//! working set is an ordered list of tasks; insertion order is significant
//! because the optimizer's tie-break depends on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Minimum hours a task may be entered with.
pub const MIN_TASK_HOURS: f64 = 0.25;
/// Maximum hours a task may be entered with.
pub const MAX_TASK_HOURS: f64 = 12.0;
/// Entry grid for task hours (quarter-hour steps).
pub const TASK_HOURS_STEP: f64 = 0.25;
/// Minimum importance rating.
pub const MIN_IMPORTANCE: u8 = 1;
/// Maximum importance rating.
pub const MAX_IMPORTANCE: u8 = 5;

/// Category of task for organizing work.
///
/// Carried through selection as opaque data; the optimizer neither weights
/// nor filters by category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Work,
    School,
    Personal,
    Health,
    Other,
}

impl Default for TaskCategory {
    fn default() -> Self {
        TaskCategory::Work
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TaskCategory::Work => "Work",
            TaskCategory::School => "School",
            TaskCategory::Personal => "Personal",
            TaskCategory::Health => "Health",
            TaskCategory::Other => "Other",
        };
        write!(f, "{name}")
    }
}

impl FromStr for TaskCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "work" => Ok(TaskCategory::Work),
            "school" => Ok(TaskCategory::School),
            "personal" => Ok(TaskCategory::Personal),
            "health" => Ok(TaskCategory::Health),
            "other" => Ok(TaskCategory::Other),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// A user-entered task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task name (non-empty)
    pub name: String,
    /// Estimated time cost in hours
    pub hours: f64,
    /// Importance rating, 1 (lowest) to 5 (highest)
    pub importance: u8,
    /// Category label, pass-through only
    pub category: TaskCategory,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task without validating entry constraints.
    ///
    /// Callers that accept arbitrary user input should use
    /// [`Task::validated`] instead.
    pub fn new(name: impl Into<String>, hours: f64, importance: u8, category: TaskCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            hours,
            importance,
            category,
            created_at: Utc::now(),
        }
    }

    /// Create a task, enforcing the entry constraints:
    /// non-empty name, hours in `[0.25, 12.0]` on the quarter-hour grid,
    /// importance in `1..=5`.
    pub fn validated(
        name: impl Into<String>,
        hours: f64,
        importance: u8,
        category: TaskCategory,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_hours(hours)?;
        validate_importance(importance)?;
        Ok(Self::new(name.trim().to_string(), hours, importance, category))
    }
}

/// Check that a task name is non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Check that hours lie within the entry range and on the step grid.
pub fn validate_hours(hours: f64) -> Result<(), ValidationError> {
    if !(MIN_TASK_HOURS..=MAX_TASK_HOURS).contains(&hours) {
        return Err(ValidationError::HoursOutOfRange {
            hours,
            min: MIN_TASK_HOURS,
            max: MAX_TASK_HOURS,
        });
    }
    let steps = hours / TASK_HOURS_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(ValidationError::HoursOffStep {
            hours,
            step: TASK_HOURS_STEP,
        });
    }
    Ok(())
}

/// Check that importance lies in `1..=5`.
pub fn validate_importance(importance: u8) -> Result<(), ValidationError> {
    if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&importance) {
        return Err(ValidationError::ImportanceOutOfRange { importance });
    }
    Ok(())
}
