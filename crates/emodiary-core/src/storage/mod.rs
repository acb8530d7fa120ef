mod config;

pub use config::{Config, JournalConfig, OutputConfig, OutputFormat};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/emodiary[-dev]/` based on EMODIARY_ENV.
///
/// Set EMODIARY_ENV=dev to use the development data directory, or
/// EMODIARY_CONFIG_DIR to use an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("EMODIARY_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("EMODIARY_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("emodiary-dev")
            } else {
                base_dir.join("emodiary")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
