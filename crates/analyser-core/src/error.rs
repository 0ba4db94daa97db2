//! Centralized error types for the analyser.

use thiserror::Error;

/// Main error type for analyser operations.
#[derive(Error, Debug)]
pub enum AnalyserError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for analyser operations.
pub type AnalyserResult<T> = Result<T, AnalyserError>;

impl AnalyserError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
