//! What-if sensitivity analysis for the optimizer.
//!
//! Re-runs selection under perturbed budgets to show how the outcome
//! responds to having more or less time. Purely a repeated-invocation
//! wrapper over [`optimize_tasks`]; the only logic of its own is the
//! lower clamp on adjusted budgets.

use serde::{Deserialize, Serialize};

use crate::task::Task;

use super::{optimize_tasks, Selection};

/// Conventional budget perturbations: one hour less, one more, two more.
pub const DEFAULT_DELTAS: [f64; 3] = [-1.0, 1.0, 2.0];

/// Floor for adjusted budgets. A delta can never push the scenario
/// budget below one hour.
pub const MIN_ADJUSTED_BUDGET: f64 = 1.0;

/// One what-if scenario: a budget perturbation and its selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfScenario {
    /// Applied perturbation in hours
    pub delta: f64,
    /// Clamped budget the optimizer ran with
    pub adjusted_budget: f64,
    /// Selection at the adjusted budget
    pub selection: Selection,
}

/// Run the optimizer once per delta, in delta order.
///
/// Each scenario uses `max(1.0, budget_hours + delta)` as its budget.
/// Determinism is inherited from [`optimize_tasks`]: identical inputs
/// yield identical scenario lists.
pub fn what_if(tasks: &[Task], budget_hours: f64, deltas: &[f64]) -> Vec<WhatIfScenario> {
    deltas
        .iter()
        .map(|&delta| {
            let adjusted_budget = (budget_hours + delta).max(MIN_ADJUSTED_BUDGET);
            WhatIfScenario {
                delta,
                adjusted_budget,
                selection: optimize_tasks(tasks, adjusted_budget),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskCategory;

    fn make_test_task(name: &str, hours: f64, importance: u8) -> Task {
        Task::new(name, hours, importance, TaskCategory::Work)
    }

    fn scenario_tasks() -> Vec<Task> {
        vec![
            make_test_task("A", 2.0, 3),
            make_test_task("B", 3.0, 3),
            make_test_task("C", 4.0, 5),
        ]
    }

    #[test]
    fn default_deltas_scenario() {
        // Budget 5 with deltas -1/+1/+2 gives adjusted budgets 4, 6, 7.
        // At 4 only one of A or B fits (A found first, value 3); at 6 and 7
        // {A, B} still wins since {A, B, C} costs 9 hours.
        let scenarios = what_if(&scenario_tasks(), 5.0, &DEFAULT_DELTAS);
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].adjusted_budget, 4.0);
        assert_eq!(scenarios[0].selection.total_importance, 3);
        assert_eq!(scenarios[0].selection.chosen[0].name, "A");

        assert_eq!(scenarios[1].adjusted_budget, 6.0);
        assert_eq!(scenarios[1].selection.total_importance, 6);

        assert_eq!(scenarios[2].adjusted_budget, 7.0);
        assert_eq!(scenarios[2].selection.total_importance, 6);
    }

    #[test]
    fn adjusted_budget_clamps_to_one_hour() {
        let scenarios = what_if(&scenario_tasks(), 1.5, &[-1.0, -5.0]);
        assert_eq!(scenarios[0].adjusted_budget, 1.0);
        assert_eq!(scenarios[1].adjusted_budget, 1.0);
    }

    #[test]
    fn results_follow_delta_order() {
        let scenarios = what_if(&scenario_tasks(), 5.0, &[2.0, -1.0, 1.0]);
        let deltas: Vec<f64> = scenarios.iter().map(|s| s.delta).collect();
        assert_eq!(deltas, vec![2.0, -1.0, 1.0]);
    }

    #[test]
    fn empty_deltas_yield_no_scenarios() {
        assert!(what_if(&scenario_tasks(), 5.0, &[]).is_empty());
    }
}
