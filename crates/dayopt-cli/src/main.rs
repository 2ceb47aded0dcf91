use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayopt-cli", version, about = "Dayopt CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Optimize the day within a time budget
    Optimize(commands::optimize::OptimizeArgs),
    /// Budget sensitivity analysis
    WhatIf(commands::what_if::WhatIfArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Optimize(args) => commands::optimize::run(args),
        Commands::WhatIf(args) => commands::what_if::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
