//! Core error types for dayopt-core.
//!
//! This module defines the error hierarchy using thiserror. The optimizer
//! and what-if driver themselves are infallible; errors arise only at the
//! storage, configuration, and input-validation boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayopt-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Task store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Optimizer guard errors
    #[error("Optimizer error: {0}")]
    Optimize(#[from] OptimizeError),
}

/// Task-store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to resolve or create the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(#[from] std::io::Error),

    /// Failed to open the task database
    #[error("Failed to open task database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Task not found by id
    #[error("Task not found: {0}")]
    TaskNotFound(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to resolve or create the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(#[from] std::io::Error),

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors for user-entered task fields.
///
/// The optimizer assumes these constraints already hold and never
/// re-checks them; validation happens where tasks are created.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Task name is empty after trimming
    #[error("Task name must not be empty")]
    EmptyName,

    /// Hours outside the allowed entry range
    #[error("Task hours {hours} out of range ({min} to {max})")]
    HoursOutOfRange { hours: f64, min: f64, max: f64 },

    /// Hours not on the quarter-hour entry grid
    #[error("Task hours {hours} must be a multiple of {step}")]
    HoursOffStep { hours: f64, step: f64 },

    /// Importance outside 1..=5
    #[error("Importance {importance} out of range (1 to 5)")]
    ImportanceOutOfRange { importance: u8 },

    /// Unknown category name
    #[error("Unknown category '{0}' (expected work, school, personal, health, or other)")]
    UnknownCategory(String),
}

/// Errors from the checked optimizer entry point.
#[derive(Error, Debug)]
pub enum OptimizeError {
    /// Task count exceeds the brute-force guard
    #[error("Too many tasks for exhaustive optimization: {count} (limit: {max})")]
    TooManyTasks { count: usize, max: usize },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::QueryFailed(err.to_string())
    }
}
