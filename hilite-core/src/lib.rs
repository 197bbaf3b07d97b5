//! Keyword match-and-mark engine
//!
//! This crate finds a keyword inside the text of a document subtree, wraps
//! every match in a marker element, and later removes those markers while
//! merging their text back into the surrounding text nodes.
//!
//! # Architecture
//!
//! - **Pattern**: keyword to pattern string, with synonym and diacritic expansion
//! - **Scanner**: direct text children of a fixed element set
//! - **Marker**: splits matching text nodes and inserts marker elements
//! - **Unmarker**: removes markers and coalesces the freed text
//! - **Highlighter**: the instance tying options, keyword and snapshot together
//!
//! The document itself is reached through the [`Tree`] trait; the
//! `hilite-html` crate implements it for parsed HTML.
//!
//! # Example
//!
//! ```rust,ignore
//! use hilite_core::{Highlighter, Options};
//!
//! let mut highlighter = Highlighter::new(&mut document, [body], "café", Options::default());
//! assert!(highlighter.highlight());
//! assert!(highlighter.remove_highlight());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod highlighter;
pub mod marker;
pub mod options;
pub mod pattern;
pub mod scanner;
pub mod sink;
pub mod tree;
pub mod unmarker;

#[cfg(test)]
mod testing;

// Re-export key types
pub use error::{HiliteError, Result};
pub use highlighter::{Highlighter, State};
pub use marker::MARKER_ATTRIBUTE;
pub use options::{Options, OptionsBuilder};
pub use pattern::{build_pattern, compile_pattern, keyword_regex, DIACRITIC_CLASSES};
pub use sink::{DebugSink, LogSink, NoopSink};
pub use tree::{NodeKind, Tree};

// Convenience functions

/// Highlight `keyword` under `context` with a one-shot instance
pub fn highlight<T, I>(tree: &mut T, context: I, keyword: &str, options: Options) -> bool
where
    T: Tree,
    I: IntoIterator<Item = T::Node>,
{
    Highlighter::new(tree, context, keyword, options).highlight()
}

/// Remove markers for `keyword` under `context` with a one-shot instance
///
/// An empty keyword removes every marker carrying the configured signature.
pub fn remove_highlight<T, I>(tree: &mut T, context: I, keyword: &str, options: Options) -> bool
where
    T: Tree,
    I: IntoIterator<Item = T::Node>,
{
    Highlighter::new(tree, context, keyword, options).remove_highlight()
}
