//! Core error types
//!
//! Entry points on [`crate::Highlighter`] never return these; they resolve
//! every condition to a boolean. The errors surface from the lower-level
//! building blocks (pattern compilation, option validation) for callers that
//! want the reason.

use thiserror::Error;

/// Errors raised while preparing a highlight run
#[derive(Error, Debug)]
pub enum HiliteError {
    /// The expanded pattern was rejected by the regex engine
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern string that failed to compile
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// An option value is unusable
    #[error("invalid option '{name}': {reason}")]
    InvalidOption {
        /// Option name as it appears in configuration
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Two synonym pairs share a term (only raised in strict mode)
    #[error("synonym pairs overlap on '{term}'")]
    OverlappingSynonyms {
        /// The shared term, lowercased
        term: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, HiliteError>;
