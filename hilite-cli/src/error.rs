//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Context selector that could not be parsed
    InvalidSelector(String),
    /// Output flags that cannot be combined
    OutputConflict(String),
    /// Files in which the context selector matched nothing
    NoSearchContext(Vec<String>),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InvalidSelector(selector) => write!(f, "Invalid selector: {selector}"),
            CliError::OutputConflict(msg) => write!(f, "Output conflict: {msg}"),
            CliError::NoSearchContext(files) => {
                write!(f, "No search context in: {}", files.join(", "))
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
