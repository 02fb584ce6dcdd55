//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Directory used when `WAYMARK_DATA_DIR` is not set.
const DEFAULT_DATA_DIR: &str = ".waymark";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the storage backend keeps its files in.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present. Every setting has a default, so
    /// loading never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            data_dir: env::var("WAYMARK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }
}
