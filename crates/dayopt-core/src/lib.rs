//! # Dayopt Core Library
//!
//! This library provides the core logic for Dayopt, a daily task
//! optimizer: given a time budget and a list of tasks (name, hours,
//! importance 1-5, category), it selects the subset maximizing total
//! importance within the budget and derives a day plan plus what-if
//! sensitivity analysis. All operations are available via a standalone
//! CLI binary built on top of this crate.
//!
//! ## Architecture
//!
//! - **Optimizer**: exact 0/1 knapsack selection by exhaustive subset
//!   enumeration, size-then-lexicographic order, strict-greater-than
//!   tie-break. Deliberately exponential; meant for small personal lists
//! - **What-if driver**: re-runs the optimizer under perturbed budgets
//! - **Day plan**: back-to-back timeline and postponed-task derivation
//! - **Storage**: SQLite working set and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`optimize_tasks`]: the selection routine
//! - [`what_if`]: budget sensitivity analysis
//! - [`DayPlan`]: rendered schedule over a [`Selection`]
//! - [`TaskDb`]: persistent working set
//! - [`Config`]: application configuration

pub mod error;
pub mod optimizer;
pub mod plan;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, OptimizeError, StoreError, ValidationError};
pub use optimizer::what_if::{what_if, WhatIfScenario, DEFAULT_DELTAS};
pub use optimizer::{optimize_tasks, optimize_tasks_checked, Selection, DEFAULT_MAX_TASKS};
pub use plan::{DayPlan, ScheduledTask};
pub use storage::{Config, TaskDb};
pub use task::{Task, TaskCategory};
