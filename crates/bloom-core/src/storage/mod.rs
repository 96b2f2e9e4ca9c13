mod config;
pub mod database;
pub mod snapshot;

pub use config::{CalendarConfig, Config, MotivationConfig};
pub use database::Database;
pub use snapshot::{load_snapshot, save_snapshot, SnapshotStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the Bloom data directory, creating it if needed.
///
/// Resolution order:
/// - `BLOOM_DATA_DIR`, used verbatim when set;
/// - `~/.config/bloom-dev/` when `BLOOM_ENV=dev`;
/// - `~/.config/bloom/` otherwise.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("BLOOM_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("BLOOM_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("bloom-dev")
            } else {
                base_dir.join("bloom")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
