//! Error types for message analysis

use thiserror::Error;

/// Errors that can occur while analyzing a message
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The analyzer result carries no body to work on
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No analyzer is registered under the requested id
    #[error("Unknown analyzer: {0}")]
    UnknownAnalyzer(String),

    /// Failed to parse the raw message structure
    #[error("Failed to parse message structure: {0}")]
    Structure(String),

    /// Pipeline configuration could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalyzeError>;
