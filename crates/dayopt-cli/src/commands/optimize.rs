//! Optimize command: run the selector over the working set and render
//! the day plan plus what-if analysis.

use clap::Args;
use serde::Serialize;

use dayopt_core::optimizer::optimize_tasks_checked;
use dayopt_core::optimizer::what_if::{what_if, WhatIfScenario};
use dayopt_core::plan::DayPlan;
use dayopt_core::storage::{Config, TaskDb};

#[derive(Args)]
pub struct OptimizeArgs {
    /// Time budget in hours (defaults to the configured budget)
    #[arg(long)]
    pub budget: Option<f64>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Combined report for JSON output.
#[derive(Serialize)]
struct OptimizeReport {
    plan: DayPlan,
    what_if: Vec<WhatIfScenario>,
}

pub fn run(args: OptimizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let budget = args.budget.unwrap_or(config.default_budget_hours);

    let db = TaskDb::open()?;
    let tasks = db.list_tasks()?;

    let selection = optimize_tasks_checked(&tasks, budget, config.max_tasks)?;
    let plan = DayPlan::build(&tasks, &selection, budget);
    let scenarios = what_if(&tasks, budget, &config.what_if_deltas);

    if args.json {
        let report = OptimizeReport {
            plan,
            what_if: scenarios,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Total time: {:.2} / {} hours", plan.hours_used, budget);
    println!("Total productivity score: {}", plan.total_importance);
    println!();

    println!("Recommended tasks:");
    if plan.schedule.is_empty() {
        println!("  (none fit the budget)");
    }
    for slot in &plan.schedule {
        let t = &slot.task;
        println!(
            "  - {} — {} hrs — importance {} — {}",
            t.name, t.hours, t.importance, t.category
        );
    }
    println!();

    println!("Postponed tasks:");
    if plan.is_complete() {
        println!("  You are completing all tasks today!");
    }
    for task in &plan.postponed {
        println!("  - {}", task.name);
    }
    println!();

    if !plan.schedule.is_empty() {
        println!("Timeline:");
        for slot in &plan.schedule {
            println!(
                "  {:>5.2} - {:>5.2}  {}",
                slot.start_hour, slot.end_hour, slot.task.name
            );
        }
        println!();
    }

    println!("What-if analysis:");
    for scenario in &scenarios {
        println!(
            "  If you had {} hours: best score = {} ({} task(s))",
            scenario.adjusted_budget,
            scenario.selection.total_importance,
            scenario.selection.len()
        );
    }

    Ok(())
}
