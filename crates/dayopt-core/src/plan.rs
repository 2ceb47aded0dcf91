//! Day plan derivation over optimizer output.
//!
//! Lays the chosen tasks back-to-back starting at hour 0 and splits the
//! working set into scheduled and postponed tasks. A trivial fold over a
//! [`Selection`]; no optimization logic lives here.

use serde::{Deserialize, Serialize};

use crate::optimizer::Selection;
use crate::task::Task;

/// One slot on the day timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// The task occupying this slot
    pub task: Task,
    /// Slot start, hours from the beginning of the day plan
    pub start_hour: f64,
    /// Slot end, hours from the beginning of the day plan
    pub end_hour: f64,
}

/// A rendered day: timeline of chosen tasks plus what gets postponed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Chosen tasks laid back-to-back from hour 0, in selection order
    pub schedule: Vec<ScheduledTask>,
    /// Tasks from the working set that did not make the cut, input order
    pub postponed: Vec<Task>,
    /// Total importance of the scheduled tasks
    pub total_importance: u32,
    /// Hours consumed by the schedule
    pub hours_used: f64,
    /// Budget the selection ran with
    pub budget_hours: f64,
}

impl DayPlan {
    /// Build a plan from the full working set and a selection over it.
    ///
    /// Postponed tasks are computed by id difference, preserving the
    /// working set's order.
    pub fn build(tasks: &[Task], selection: &Selection, budget_hours: f64) -> Self {
        let mut cursor = 0.0;
        let schedule: Vec<ScheduledTask> = selection
            .chosen
            .iter()
            .map(|task| {
                let start_hour = cursor;
                cursor += task.hours;
                ScheduledTask {
                    task: task.clone(),
                    start_hour,
                    end_hour: cursor,
                }
            })
            .collect();

        let postponed: Vec<Task> = tasks
            .iter()
            .filter(|t| !selection.chosen.iter().any(|c| c.id == t.id))
            .cloned()
            .collect();

        Self {
            schedule,
            postponed,
            total_importance: selection.total_importance,
            hours_used: selection.total_hours,
            budget_hours,
        }
    }

    /// True when every task in the working set was scheduled.
    pub fn is_complete(&self) -> bool {
        self.postponed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::optimize_tasks;
    use crate::task::TaskCategory;

    fn make_test_task(name: &str, hours: f64, importance: u8) -> Task {
        Task::new(name, hours, importance, TaskCategory::Work)
    }

    #[test]
    fn schedule_is_back_to_back_from_zero() {
        let tasks = vec![
            make_test_task("A", 2.0, 3),
            make_test_task("B", 3.0, 3),
            make_test_task("C", 4.0, 5),
        ];
        let selection = optimize_tasks(&tasks, 5.0);
        let plan = DayPlan::build(&tasks, &selection, 5.0);

        assert_eq!(plan.schedule.len(), 2);
        assert_eq!(plan.schedule[0].task.name, "A");
        assert_eq!(plan.schedule[0].start_hour, 0.0);
        assert_eq!(plan.schedule[0].end_hour, 2.0);
        assert_eq!(plan.schedule[1].task.name, "B");
        assert_eq!(plan.schedule[1].start_hour, 2.0);
        assert_eq!(plan.schedule[1].end_hour, 5.0);
        assert_eq!(plan.hours_used, 5.0);
        assert_eq!(plan.total_importance, 6);
    }

    #[test]
    fn postponed_is_set_difference_in_input_order() {
        let tasks = vec![
            make_test_task("A", 2.0, 3),
            make_test_task("B", 3.0, 3),
            make_test_task("C", 4.0, 5),
        ];
        let selection = optimize_tasks(&tasks, 5.0);
        let plan = DayPlan::build(&tasks, &selection, 5.0);

        let postponed: Vec<&str> = plan.postponed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(postponed, vec!["C"]);
        assert!(!plan.is_complete());
    }

    #[test]
    fn complete_day_has_no_postponed_tasks() {
        let tasks = vec![make_test_task("A", 1.0, 2), make_test_task("B", 2.0, 4)];
        let selection = optimize_tasks(&tasks, 8.0);
        let plan = DayPlan::build(&tasks, &selection, 8.0);
        assert!(plan.is_complete());
        assert_eq!(plan.schedule.len(), 2);
    }

    #[test]
    fn empty_selection_postpones_everything() {
        let tasks = vec![make_test_task("A", 4.0, 5)];
        let selection = optimize_tasks(&tasks, 1.0);
        let plan = DayPlan::build(&tasks, &selection, 1.0);
        assert!(plan.schedule.is_empty());
        assert_eq!(plan.postponed.len(), 1);
        assert_eq!(plan.hours_used, 0.0);
    }
}
