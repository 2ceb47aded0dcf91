//! Configuration management commands.

use clap::Subcommand;
use dayopt_core::storage::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Update configuration values
    Set {
        /// Default budget in hours
        #[arg(long)]
        budget: Option<f64>,
        /// Comma-separated what-if deltas, e.g. "-1,1,2"
        #[arg(long, allow_hyphen_values = true)]
        deltas: Option<String>,
        /// Maximum task count for the exhaustive optimizer
        #[arg(long)]
        max_tasks: Option<usize>,
    },
    /// Reset configuration to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Set {
            budget,
            deltas,
            max_tasks,
        } => {
            let mut config = Config::load_or_default();
            if let Some(budget) = budget {
                if budget <= 0.0 {
                    return Err("budget must be positive".into());
                }
                config.default_budget_hours = budget;
            }
            if let Some(raw) = deltas {
                let parsed: Result<Vec<f64>, _> =
                    raw.split(',').map(|p| p.trim().parse::<f64>()).collect();
                config.what_if_deltas =
                    parsed.map_err(|_| format!("cannot parse deltas '{raw}'"))?;
            }
            if let Some(max_tasks) = max_tasks {
                config.max_tasks = max_tasks;
            }
            config.save()?;
            println!("config updated");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
