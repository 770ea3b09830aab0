//! Runtime settings for the terminal.

use std::path::PathBuf;

/// Environment variable overriding [`Settings::data_file`].
pub const DATA_FILE_VAR: &str = "CARPOOL_DATA_FILE";

/// Environment variable overriding [`Settings::log_filter`].
pub const LOG_FILTER_VAR: &str = "CARPOOL_LOG";

/// Where data lives and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path to the JSON data file.
    pub data_file: PathBuf,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Settings {
    /// Defaults overridden by `CARPOOL_DATA_FILE` and `CARPOOL_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(path) = lookup(DATA_FILE_VAR).filter(|v| !v.is_empty()) {
            settings.data_file = PathBuf::from(path);
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|v| !v.is_empty()) {
            settings.log_filter = filter;
        }
        settings
    }

    /// Set a custom data file.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/carpool.json"),
            log_filter: "carpool_terminal=info".to_string(),
        }
    }
}
