use std::io;
use thiserror::Error;

/// Unified error type for the aigen application
#[derive(Error, Debug)]
pub enum AigenError {
    /// Upstream API errors (non-success status, unexpected reply)
    #[error("API error: {0}")]
    Api(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for AigenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AigenError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            AigenError::Network(format!("Connection failed: {}", err))
        } else if err.is_status() {
            AigenError::Api(format!("API returned error status: {}", err))
        } else {
            AigenError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for AigenError {
    fn from(err: serde_json::Error) -> Self {
        AigenError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yml::Error> for AigenError {
    fn from(err: serde_yml::Error) -> Self {
        AigenError::Serialization(format!("YAML error: {}", err))
    }
}
