mod config;

pub use config::{ApiConfig, Config, UiConfig};

use std::path::PathBuf;

/// Returns `~/.config/studywell[-dev]/` based on STUDYWELL_ENV.
///
/// Set STUDYWELL_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYWELL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studywell-dev")
    } else {
        base_dir.join("studywell")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
