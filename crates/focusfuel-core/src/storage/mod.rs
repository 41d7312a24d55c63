mod config;
pub mod database;

pub use config::Config;
pub use database::Database;

use std::path::PathBuf;

/// Returns the data directory, creating it if necessary.
///
/// Resolution order:
/// 1. `FOCUSFUEL_DATA_DIR` -- explicit override, used by e2e tests.
/// 2. `~/.config/focusfuel-dev` when `FOCUSFUEL_ENV=dev`.
/// 3. `~/.config/focusfuel` otherwise.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = if let Ok(explicit) = std::env::var("FOCUSFUEL_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("FOCUSFUEL_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("focusfuel-dev")
        } else {
            base_dir.join("focusfuel")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
