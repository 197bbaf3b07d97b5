//! Highlighting options and their builder

use crate::error::{HiliteError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default tag name for marker elements
pub const DEFAULT_ELEMENT: &str = "span";

/// Default class stamped on marker elements
pub const DEFAULT_CLASS_NAME: &str = "highlight";

/// Options controlling a highlight or removal run
///
/// Every field has a default, so a partial TOML/JSON table deserializes into a
/// complete value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Tag name used for marker elements
    pub element: String,
    /// Class stamped on marker elements
    pub class_name: String,
    /// Selectors of elements excluded from scanning
    pub filter: Vec<String>,
    /// Highlight each space-delimited token of the keyword on its own
    pub separate_word_search: bool,
    /// Match accented variants of Latin letters
    pub diacritics: bool,
    /// Two-way term associations, applied in insertion order
    pub synonyms: IndexMap<String, String>,
    /// Emit diagnostics through the debug sink
    pub debug: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            element: DEFAULT_ELEMENT.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            filter: Vec::new(),
            separate_word_search: false,
            diacritics: true,
            synonyms: IndexMap::new(),
            debug: false,
        }
    }
}

impl Options {
    /// Create a builder starting from the defaults
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Check that the options describe a usable marker signature
    pub fn validate(&self) -> Result<()> {
        validate_tag(&self.element)?;

        if self.class_name.is_empty() {
            return Err(HiliteError::InvalidOption {
                name: "class_name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.class_name.chars().any(char::is_whitespace) {
            return Err(HiliteError::InvalidOption {
                name: "class_name",
                reason: format!("'{}' must be a single class", self.class_name),
            });
        }

        for (term, synonym) in &self.synonyms {
            if term.is_empty() || synonym.is_empty() {
                return Err(HiliteError::InvalidOption {
                    name: "synonyms",
                    reason: format!("empty term in pair '{term}' = '{synonym}'"),
                });
            }
        }

        Ok(())
    }

    /// Reject synonym pairs whose terms coincide or contain one another
    pub fn check_synonym_overlap(&self) -> Result<()> {
        let pairs: Vec<[String; 2]> = self
            .synonyms
            .iter()
            .map(|(term, synonym)| [term.to_lowercase(), synonym.to_lowercase()])
            .collect();

        for (i, left) in pairs.iter().enumerate() {
            for right in &pairs[i + 1..] {
                for a in left {
                    for b in right {
                        if a.contains(b.as_str()) || b.contains(a.as_str()) {
                            let term = if a.len() <= b.len() { a } else { b };
                            return Err(HiliteError::OverlappingSynonyms { term: term.clone() });
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

fn validate_tag(tag: &str) -> Result<()> {
    let mut chars = tag.chars();
    let valid = matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(HiliteError::InvalidOption {
            name: "element",
            reason: format!("'{tag}' is not a valid tag name"),
        })
    }
}

/// Builder for [`Options`]
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    options: Options,
    strict_synonyms: bool,
}

impl OptionsBuilder {
    /// Set the marker tag name
    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.options.element = element.into();
        self
    }

    /// Set the marker class
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.options.class_name = class_name.into();
        self
    }

    /// Exclude elements matching a selector
    pub fn filter(mut self, selector: impl Into<String>) -> Self {
        self.options.filter.push(selector.into());
        self
    }

    /// Toggle separate word search
    pub fn separate_word_search(mut self, enabled: bool) -> Self {
        self.options.separate_word_search = enabled;
        self
    }

    /// Toggle diacritic expansion
    pub fn diacritics(mut self, enabled: bool) -> Self {
        self.options.diacritics = enabled;
        self
    }

    /// Register a synonym pair
    pub fn synonym(mut self, term: impl Into<String>, synonym: impl Into<String>) -> Self {
        self.options.synonyms.insert(term.into(), synonym.into());
        self
    }

    /// Toggle debug diagnostics
    pub fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = enabled;
        self
    }

    /// Fail the build when synonym pairs overlap
    pub fn strict_synonyms(mut self, enabled: bool) -> Self {
        self.strict_synonyms = enabled;
        self
    }

    /// Validate and build the options
    pub fn build(self) -> Result<Options> {
        self.options.validate()?;
        if self.strict_synonyms {
            self.options.check_synonym_overlap()?;
        }

        Ok(self.options)
    }
}
