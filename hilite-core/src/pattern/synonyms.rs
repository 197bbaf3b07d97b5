//! Synonym alternation
//!
//! Pairs compose left to right over the working pattern. A later pair may
//! match inside a group produced by an earlier one; that ordering effect is
//! kept as is.

use indexmap::IndexMap;
use regex::{NoExpand, RegexBuilder};

/// Replace occurrences of each term or its synonym with `(term|synonym)`
///
/// `pattern` is an escaped regex string, so terms are escaped once for the
/// alternation and a second time to locate them literally inside it.
pub fn expand_synonyms(pattern: &str, synonyms: &IndexMap<String, String>) -> String {
    let mut expanded = pattern.to_string();

    for (term, synonym) in synonyms {
        let term = regex::escape(term);
        let synonym = regex::escape(synonym);
        let locate = format!("{}|{}", regex::escape(&term), regex::escape(&synonym));

        let finder = match RegexBuilder::new(&locate).case_insensitive(true).build() {
            Ok(finder) => finder,
            Err(e) => {
                log::warn!(target: "hilite", "skipping synonym pair '{term}'/'{synonym}': {e}");
                continue;
            }
        };

        let group = format!("({term}|{synonym})");
        expanded = finder
            .replace_all(&expanded, NoExpand(&group))
            .into_owned();
    }

    expanded
}
