//! Task management commands for CLI.

use clap::Subcommand;
use dayopt_core::error::StoreError;
use dayopt_core::storage::TaskDb;
use dayopt_core::task::{Task, TaskCategory};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the working set
    Add {
        /// Task name
        name: String,
        /// Estimated hours (0.25 to 12.0, quarter-hour steps)
        #[arg(long)]
        hours: f64,
        /// Importance, 1 (lowest) to 5 (highest)
        #[arg(long, default_value = "3")]
        importance: u8,
        /// Category: work, school, personal, health, or other
        #[arg(long, default_value = "work")]
        category: String,
    },
    /// List tasks in insertion order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Remove every task from the working set
    Clear,
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = TaskDb::open()?;

    match action {
        TaskAction::Add {
            name,
            hours,
            importance,
            category,
        } => {
            let category: TaskCategory = category.parse()?;
            let task = Task::validated(name, hours, importance, category)?;
            db.create_task(&task)?;
            println!("Task added: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { json } => {
            let tasks = db.list_tasks()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("No tasks yet.");
            } else {
                for task in &tasks {
                    println!(
                        "{}  {} — {} hrs — importance {} — {}",
                        task.id, task.name, task.hours, task.importance, task.category
                    );
                }
            }
        }
        TaskAction::Get { id } => match db.get_task(&id)? {
            Some(task) => println!("{}", serde_json::to_string_pretty(&task)?),
            None => return Err(StoreError::TaskNotFound(id).into()),
        },
        TaskAction::Delete { id } => {
            if db.delete_task(&id)? {
                println!("Task deleted: {id}");
            } else {
                return Err(StoreError::TaskNotFound(id).into());
            }
        }
        TaskAction::Clear => {
            let removed = db.clear_tasks()?;
            println!("Removed {removed} task(s)");
        }
    }
    Ok(())
}
