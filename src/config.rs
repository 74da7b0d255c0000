use std::path::PathBuf;

/// Environment variable overriding the data file location.
pub const DATA_FILE_ENV: &str = "MOMENTUM_DATA_FILE";
pub const DEFAULT_DATA_FILE: &str = "momentum-weights.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file the weight store is loaded from and saved to.
    pub data_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_data_file(std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
    }

    fn from_data_file(data_file: Option<PathBuf>) -> Self {
        Self {
            data_file: data_file
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_data_file(None)
    }
}
