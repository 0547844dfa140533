//! Error types
//!
//! The interaction state machine itself never fails: host commands are
//! assumed to succeed and guard conditions stand in for errors. Only
//! configuration loading can go wrong.

use thiserror::Error;

/// Errors raised while building a chrome controller
#[derive(Error, Debug)]
pub enum ChromeError {
    #[error("Invalid chrome configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse chrome configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ChromeError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result type for chrome operations
pub type Result<T> = std::result::Result<T, ChromeError>;
