mod config;
pub mod task_db;

pub use config::Config;
pub use task_db::TaskDb;

use std::path::PathBuf;

/// Returns the data directory, `~/.config/dayopt[-dev]/` by default.
///
/// `DAYOPT_DATA_DIR` overrides the location entirely (used for test
/// isolation). Otherwise set `DAYOPT_ENV=dev` to use the development
/// data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = if let Ok(explicit) = std::env::var("DAYOPT_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("DAYOPT_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("dayopt-dev")
        } else {
            base_dir.join("dayopt")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test that touches process env; config and task_db tests
    // stay off the real data dir (string roundtrips / in-memory db).
    #[test]
    fn data_dir_honors_explicit_override() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("dayopt-test-data");
        std::env::set_var("DAYOPT_DATA_DIR", &target);
        let resolved = data_dir().unwrap();
        std::env::remove_var("DAYOPT_DATA_DIR");

        assert_eq!(resolved, target);
        assert!(resolved.is_dir());
    }
}
