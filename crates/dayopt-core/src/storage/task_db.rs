//! SQLite-based storage for the working set of tasks.
//!
//! The optimizer contract requires "order = insertion order", so tasks
//! carry an autoincrement position column and every listing is ordered
//! by it. Selections and day plans are never persisted; only the task
//! list survives between invocations.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::StoreError;
use crate::task::{Task, TaskCategory};

/// Parse task category from database string
fn parse_task_category(category_str: &str) -> TaskCategory {
    match category_str {
        "School" => TaskCategory::School,
        "Personal" => TaskCategory::Personal,
        "Health" => TaskCategory::Health,
        "Other" => TaskCategory::Other,
        _ => TaskCategory::Work,
    }
}

/// Format task category for database storage
fn format_task_category(category: TaskCategory) -> &'static str {
    match category {
        TaskCategory::Work => "Work",
        TaskCategory::School => "School",
        TaskCategory::Personal => "Personal",
        TaskCategory::Health => "Health",
        TaskCategory::Other => "Other",
    }
}

/// Parse datetime from RFC3339 string with fallback to current time
fn parse_datetime_fallback(dt_str: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(dt_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

/// Build a Task from a database row (id, name, hours, importance,
/// category, created_at).
fn row_to_task(row: &rusqlite::Row) -> Result<Task, rusqlite::Error> {
    let category_str: String = row.get(4)?;
    let created_at_str: String = row.get(5)?;
    let importance: i64 = row.get(3)?;

    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        hours: row.get(2)?,
        importance: importance as u8,
        category: parse_task_category(&category_str),
        created_at: parse_datetime_fallback(&created_at_str),
    })
}

/// Task database handle.
pub struct TaskDb {
    conn: Connection,
}

impl TaskDb {
    /// Open (and migrate) the task database at `<data_dir>/dayopt.db`.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be resolved or the
    /// database cannot be opened.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()?.join("dayopt.db");
        let conn = Connection::open(&path)
            .map_err(|source| StoreError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                position   INTEGER PRIMARY KEY AUTOINCREMENT,
                id         TEXT NOT NULL UNIQUE,
                name       TEXT NOT NULL,
                hours      REAL NOT NULL,
                importance INTEGER NOT NULL,
                category   TEXT NOT NULL DEFAULT 'Work',
                created_at TEXT NOT NULL
            );",
        )
    }

    /// Append a task to the working set.
    pub fn create_task(&self, task: &Task) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO tasks (id, name, hours, importance, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                task.id,
                task.name,
                task.hours,
                task.importance as i64,
                format_task_category(task.category),
                task.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// List all tasks in insertion order.
    pub fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, hours, importance, category, created_at
             FROM tasks ORDER BY position",
        )?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    /// Fetch one task by id.
    pub fn get_task(&self, id: &str) -> Result<Option<Task>, StoreError> {
        let task = self
            .conn
            .query_row(
                "SELECT id, name, hours, importance, category, created_at
                 FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    /// Delete one task by id. Returns true if a row was removed.
    pub fn delete_task(&self, id: &str) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// Delete every task. Returns the number of removed rows.
    pub fn clear_tasks(&self) -> Result<usize, StoreError> {
        let affected = self.conn.execute("DELETE FROM tasks", [])?;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_task(name: &str, hours: f64, importance: u8, category: TaskCategory) -> Task {
        Task::new(name, hours, importance, category)
    }

    #[test]
    fn create_and_list_preserves_insertion_order() {
        let db = TaskDb::open_memory().unwrap();
        let a = make_test_task("A", 2.0, 3, TaskCategory::Work);
        let b = make_test_task("B", 3.0, 3, TaskCategory::School);
        let c = make_test_task("C", 4.0, 5, TaskCategory::Health);
        db.create_task(&a).unwrap();
        db.create_task(&b).unwrap();
        db.create_task(&c).unwrap();

        let listed = db.list_tasks().unwrap();
        let names: Vec<&str> = listed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(listed[1].category, TaskCategory::School);
        assert_eq!(listed[2].hours, 4.0);
    }

    #[test]
    fn get_task_roundtrips_fields() {
        let db = TaskDb::open_memory().unwrap();
        let task = make_test_task("Read paper", 1.25, 2, TaskCategory::Personal);
        db.create_task(&task).unwrap();

        let fetched = db.get_task(&task.id).unwrap().unwrap();
        assert_eq!(fetched.id, task.id);
        assert_eq!(fetched.name, "Read paper");
        assert_eq!(fetched.hours, 1.25);
        assert_eq!(fetched.importance, 2);
        assert_eq!(fetched.category, TaskCategory::Personal);
    }

    #[test]
    fn get_missing_task_returns_none() {
        let db = TaskDb::open_memory().unwrap();
        assert!(db.get_task("no-such-id").unwrap().is_none());
    }

    #[test]
    fn delete_task_removes_only_target() {
        let db = TaskDb::open_memory().unwrap();
        let a = make_test_task("A", 1.0, 1, TaskCategory::Work);
        let b = make_test_task("B", 1.0, 1, TaskCategory::Work);
        db.create_task(&a).unwrap();
        db.create_task(&b).unwrap();

        assert!(db.delete_task(&a.id).unwrap());
        assert!(!db.delete_task(&a.id).unwrap());
        let remaining = db.list_tasks().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "B");
    }

    #[test]
    fn clear_tasks_empties_the_working_set() {
        let db = TaskDb::open_memory().unwrap();
        for i in 0..3 {
            db.create_task(&make_test_task(&format!("t{i}"), 1.0, 1, TaskCategory::Other))
                .unwrap();
        }
        assert_eq!(db.clear_tasks().unwrap(), 3);
        assert!(db.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn insertion_order_survives_deletion() {
        let db = TaskDb::open_memory().unwrap();
        let a = make_test_task("A", 1.0, 1, TaskCategory::Work);
        let b = make_test_task("B", 1.0, 1, TaskCategory::Work);
        let c = make_test_task("C", 1.0, 1, TaskCategory::Work);
        db.create_task(&a).unwrap();
        db.create_task(&b).unwrap();
        db.create_task(&c).unwrap();
        db.delete_task(&b.id).unwrap();
        let d = make_test_task("D", 1.0, 1, TaskCategory::Work);
        db.create_task(&d).unwrap();

        let names: Vec<String> = db.list_tasks().unwrap().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }
}
