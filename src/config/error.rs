//! Configuration loading errors.

use thiserror::Error;

/// Config load error.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for ConfigLoadError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigLoadError::Parse(e.to_string())
    }
}
