use std::path::PathBuf;

use crate::error::{FarsError, Result};

const DEFAULT_LOG_FILE: &str = "logs/fars_explorer.log";
const DEFAULT_PLOT_WIDTH: u32 = 1024;
const DEFAULT_PLOT_HEIGHT: u32 = 768;

/// Runtime settings gathered from CLI flags and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_file_path: PathBuf,
    pub plot_width: u32,
    pub plot_height: u32,
}

impl AppConfig {
    /// Reads `LOG_FILE_PATH`, `FARS_PLOT_WIDTH` and `FARS_PLOT_HEIGHT` from
    /// the process environment.
    pub fn from_env(data_dir: PathBuf) -> Result<Self> {
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(
        data_dir: PathBuf,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let log_file_path = lookup("LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            data_dir,
            log_file_path,
            plot_width: dimension(&lookup, "FARS_PLOT_WIDTH", DEFAULT_PLOT_WIDTH)?,
            plot_height: dimension(&lookup, "FARS_PLOT_HEIGHT", DEFAULT_PLOT_HEIGHT)?,
        })
    }
}

fn dimension(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> Result<u32> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(FarsError::Config(format!(
                "{key} must be a positive integer, got '{raw}'"
            ))),
        },
    }
}
