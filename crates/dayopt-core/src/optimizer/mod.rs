//! Exact 0/1 knapsack selection over a small task list.
//!
//! Given a task list and a time budget, select the subset maximizing total
//! importance with total hours within the budget. The search is exhaustive:
//! every non-empty subset is tried, grouped by increasing size and within a
//! size in lexicographic index order. A subset replaces the incumbent only
//! when its value is strictly greater, so the first subset reaching a given
//! maximal value wins; later equal-value subsets never displace it, even
//! when they cost less time. That enumeration-order tie-break is part of
//! the contract; what-if comparisons depend on it being deterministic.
//!
//! Cost is `O(2^n · n)` with no pruning. Intended for personal task lists
//! of at most a few tens of items; see [`optimize_tasks_checked`] for the
//! opt-in guard.

pub mod combinations;
pub mod what_if;

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::task::Task;
use combinations::Combinations;

/// Default task-count cap for [`optimize_tasks_checked`].
pub const DEFAULT_MAX_TASKS: usize = 20;

/// Result of one optimization run.
///
/// `chosen` is a subsequence of the input in its original order.
/// Recomputed fresh on every call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected tasks, input order preserved
    pub chosen: Vec<Task>,
    /// Sum of importance over `chosen`
    pub total_importance: u32,
    /// Sum of hours over `chosen`
    pub total_hours: f64,
}

impl Selection {
    /// The empty selection, returned when no task fits the budget.
    pub fn empty() -> Self {
        Self {
            chosen: Vec::new(),
            total_importance: 0,
            total_hours: 0.0,
        }
    }

    /// Number of selected tasks.
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    /// True when nothing fit the budget.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}

/// Select the subset of `tasks` maximizing total importance subject to
/// total hours `<= budget_hours`.
///
/// Pure function: no side effects, identical output for identical inputs.
/// Never fails; an empty task list or an unreachable budget (including
/// zero or negative) yields the empty selection. The incumbent starts at
/// value 0, so the empty subset is the implicit fallback and is never
/// explicitly tested (every task has importance >= 1).
pub fn optimize_tasks(tasks: &[Task], budget_hours: f64) -> Selection {
    let mut best_importance: u32 = 0;
    let mut best_indices: Vec<usize> = Vec::new();

    for r in 1..=tasks.len() {
        for combo in Combinations::new(tasks.len(), r) {
            let total_hours: f64 = combo.iter().map(|&i| tasks[i].hours).sum();
            let total_importance: u32 = combo.iter().map(|&i| u32::from(tasks[i].importance)).sum();

            // Strict greater-than: first subset at a maximal value wins.
            if total_hours <= budget_hours && total_importance > best_importance {
                best_importance = total_importance;
                best_indices = combo;
            }
        }
    }

    let chosen: Vec<Task> = best_indices.iter().map(|&i| tasks[i].clone()).collect();
    let total_hours = chosen.iter().map(|t| t.hours).sum();
    Selection {
        chosen,
        total_importance: best_importance,
        total_hours,
    }
}

/// [`optimize_tasks`] behind a caller-supplied task-count guard.
///
/// The exhaustive search has no escape hatch once started; this wrapper
/// refuses lists longer than `max_tasks` instead. Behavior on accepted
/// inputs is identical to the unguarded function.
pub fn optimize_tasks_checked(
    tasks: &[Task],
    budget_hours: f64,
    max_tasks: usize,
) -> Result<Selection, OptimizeError> {
    if tasks.len() > max_tasks {
        return Err(OptimizeError::TooManyTasks {
            count: tasks.len(),
            max: max_tasks,
        });
    }
    Ok(optimize_tasks(tasks, budget_hours))
}
