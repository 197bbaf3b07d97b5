//! Adapter error types

use thiserror::Error;

/// Errors raised while loading or querying an HTML document
#[derive(Error, Debug)]
pub enum HtmlError {
    /// The selector could not be parsed
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, HtmlError>;
