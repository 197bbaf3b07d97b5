//! Keyword to pattern expansion
//!
//! A keyword is escaped, then synonym pairs turn into alternation groups, then
//! letters with accented variants turn into character classes. The result is a
//! plain pattern string; [`compile_pattern`] turns it into a matcher.

pub mod diacritics;
pub mod synonyms;

use crate::error::{HiliteError, Result};
use crate::options::Options;
use regex::{Regex, RegexBuilder};

pub use diacritics::{expand_diacritics, DIACRITIC_CLASSES};
pub use synonyms::expand_synonyms;

/// Build the uncompiled pattern for `keyword`
///
/// The keyword matches literally; regex metacharacters in it carry no meaning.
/// An empty keyword yields an empty pattern, which matches everywhere.
pub fn build_pattern(keyword: &str, options: &Options) -> String {
    if keyword.is_empty() {
        return String::new();
    }

    let mut pattern = regex::escape(keyword);
    if !options.synonyms.is_empty() {
        pattern = expand_synonyms(&pattern, &options.synonyms);
    }
    if options.diacritics {
        pattern = expand_diacritics(&pattern);
    }

    pattern
}

/// Compile a pattern with case-insensitive, multi-line semantics
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .map_err(|source| HiliteError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Build and compile the matcher for `keyword` in one step
pub fn keyword_regex(keyword: &str, options: &Options) -> Result<Regex> {
    compile_pattern(&build_pattern(keyword, options))
}
