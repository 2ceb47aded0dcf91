//! Standalone what-if command with custom deltas.

use clap::Args;

use dayopt_core::optimizer::what_if::what_if;
use dayopt_core::storage::{Config, TaskDb};

#[derive(Args)]
pub struct WhatIfArgs {
    /// Time budget in hours (defaults to the configured budget)
    #[arg(long)]
    pub budget: Option<f64>,
    /// Comma-separated budget deltas, e.g. "-1,1,2" (defaults to the
    /// configured deltas)
    #[arg(long, allow_hyphen_values = true)]
    pub deltas: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_deltas(raw: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("cannot parse delta '{}'", part.trim()).into())
        })
        .collect()
}

pub fn run(args: WhatIfArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let budget = args.budget.unwrap_or(config.default_budget_hours);
    let deltas = match &args.deltas {
        Some(raw) => parse_deltas(raw)?,
        None => config.what_if_deltas.clone(),
    };

    let db = TaskDb::open()?;
    let tasks = db.list_tasks()?;
    let scenarios = what_if(&tasks, budget, &deltas);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scenarios)?);
        return Ok(());
    }

    println!("What-if analysis (base budget {budget} hours):");
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
