use std::path::PathBuf;

use thiserror::Error;

/// Problems detected before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("output must point to an output directory that exists: {}", .0.display())]
    OutputNotDirectory(PathBuf),

    #[error("config file not found: {}", .0.display())]
    MissingConfigFile(PathBuf),

    #[error(transparent)]
    Figment(#[from] figment::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
