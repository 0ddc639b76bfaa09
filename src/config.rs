use std::path::PathBuf;

/// Environment variable naming the dataset file.
pub const DATA_FILE_ENV: &str = "DECARB_DATA_FILE";

const DEFAULT_DATA_FILE: &str = "data/scenarios.csv";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the scenario dataset (CSV or JSON).
    pub dataset_path: PathBuf,
}

impl Config {
    /// Build from the process environment, falling back to the default
    /// relative dataset path when the override is unset.
    pub fn from_env() -> Self {
        let dataset_path = std::env::var_os(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Config { dataset_path }
    }
}
