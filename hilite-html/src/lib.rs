//! HTML adapter for the hilite engine
//!
//! [`HtmlDocument`] parses markup with `html5ever` (through `kuchiki`) and
//! implements [`hilite_core::Tree`], so a [`hilite_core::Highlighter`] can mark
//! and unmark keywords in it directly.

#![warn(missing_docs)]

pub mod document;
pub mod error;

// Re-export key types
pub use document::HtmlDocument;
pub use error::{HtmlError, Result};
pub use kuchiki::NodeRef;
