//! Highlighting instance
//!
//! A [`Highlighter`] fixes its element set when it is created. Later changes
//! to the tree are not picked up; create a new instance for a fresh snapshot.

use crate::marker::{is_marked, is_marker, mark_elements};
use crate::options::Options;
use crate::pattern::{build_pattern, compile_pattern};
use crate::sink::{DebugSink, LogSink};
use crate::tree::Tree;
use crate::unmarker::unmark;
use regex::Regex;

/// Lifecycle of an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State<N> {
    /// Element set fixed, nothing marked yet
    Ready,
    /// Markers inserted by this instance that are still in the tree
    Highlighted {
        /// Markers in insertion order
        markers: Vec<N>,
    },
    /// A removal pass consumed every marker this instance inserted
    Removed,
}

/// Keyword highlighter bound to one tree and one element snapshot
pub struct Highlighter<'t, T: Tree> {
    tree: &'t mut T,
    keyword: String,
    options: Options,
    elements: Vec<T::Node>,
    state: State<T::Node>,
    sink: Box<dyn DebugSink>,
}

impl<'t, T: Tree> Highlighter<'t, T> {
    /// Snapshot every element under `context` (roots included), minus filtered ones
    pub fn new<I>(tree: &'t mut T, context: I, keyword: impl Into<String>, options: Options) -> Self
    where
        I: IntoIterator<Item = T::Node>,
    {
        let mut elements: Vec<T::Node> = Vec::new();
        let mut roots: Vec<T::Node> = Vec::new();
        for root in context {
            if is_covered(&*tree, &root, &roots) {
                continue;
            }
            let subtree = tree.subtree(&root);
            if roots.is_empty() {
                elements = subtree;
            } else {
                for element in subtree {
                    if !elements.contains(&element) {
                        elements.push(element);
                    }
                }
            }
            roots.push(root);
        }
        if !options.filter.is_empty() {
            elements = tree.filter_out(elements, &options.filter);
        }

        Self {
            tree,
            keyword: keyword.into(),
            options,
            elements,
            state: State::Ready,
            sink: Box::new(LogSink),
        }
    }

    /// Send debug diagnostics to `sink` instead of the `log` facade
    pub fn with_sink(mut self, sink: impl DebugSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// The keyword given at construction
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The options in effect
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The element snapshot
    pub fn elements(&self) -> &[T::Node] {
        &self.elements
    }

    /// Current lifecycle state
    pub fn state(&self) -> &State<T::Node> {
        &self.state
    }

    /// Number of markers this instance inserted that are still tracked
    pub fn marker_count(&self) -> usize {
        match &self.state {
            State::Highlighted { markers } => markers.len(),
            State::Ready | State::Removed => 0,
        }
    }

    /// Highlight the instance keyword
    ///
    /// Returns `false` when there is no search context, the options fail
    /// [`Options::validate`], or the pattern cannot be compiled. With
    /// separate word search the first failing token pass fails the call. An
    /// empty keyword succeeds without changes.
    pub fn highlight(&mut self) -> bool {
        let keyword = self.keyword.clone();
        self.highlight_keyword(&keyword)
    }

    fn highlight_keyword(&mut self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        if self.elements.is_empty() {
            self.debug("No search context provided");
            return false;
        }
        if !self.options_valid() {
            return false;
        }

        let tree = &*self.tree;
        self.elements.retain(|element| !is_marked(tree, element));

        if self.options.separate_word_search && keyword.contains(' ') {
            self.debug("Highlighting keywords separately");
            return keyword
                .split(' ')
                .filter(|token| !token.is_empty())
                .all(|token| self.highlight_keyword(token));
        }

        self.debug(&format!(
            "Highlighting keyword '{keyword}' in {} elements",
            self.elements.len()
        ));
        let pattern = build_pattern(keyword, &self.options);
        let regex = match compile_pattern(&pattern) {
            Ok(regex) => regex,
            Err(e) => {
                self.debug(&e.to_string());
                return false;
            }
        };

        let report = mark_elements(self.tree, &self.elements, &regex, &self.options);
        self.debug(&format!(
            "Regex: '{pattern}'. Marked {} matches in {} text nodes",
            report.markers.len(),
            report.matched_nodes
        ));

        if !report.markers.is_empty() {
            match &mut self.state {
                State::Highlighted { markers } => markers.extend(report.markers),
                state => {
                    *state = State::Highlighted {
                        markers: report.markers,
                    }
                }
            }
        }

        true
    }

    /// Remove markers whose text matches the instance keyword
    ///
    /// Candidates are the markers in the snapshot plus the markers this
    /// instance inserted. An empty keyword removes every marker with the
    /// configured signature. Returns `false` when there is no search context,
    /// the options fail [`Options::validate`], or the pattern cannot be
    /// compiled.
    pub fn remove_highlight(&mut self) -> bool {
        if self.elements.is_empty() {
            self.debug("No search context provided");
            return false;
        }
        if !self.options_valid() {
            return false;
        }
        if self.keyword.is_empty() {
            self.debug("Removing highlighting");
        } else {
            self.debug(&format!(
                "Removing highlighting with keyword: '{}'",
                self.keyword
            ));
        }

        let regex = match self.removal_regex() {
            Ok(regex) => regex,
            Err(message) => {
                self.debug(&message);
                return false;
            }
        };

        let tree = &*self.tree;
        let mut candidates: Vec<T::Node> = self
            .elements
            .iter()
            .filter(|element| is_marker(tree, element, &self.options))
            .cloned()
            .collect();
        if let State::Highlighted { markers } = &self.state {
            candidates.extend(markers.iter().cloned());
        }

        let removed = unmark(self.tree, &candidates, &regex);
        self.debug(&format!(
            "Removed {removed} of {} candidate markers",
            candidates.len()
        ));

        let tree = &*self.tree;
        let drained = match &mut self.state {
            State::Highlighted { markers } => {
                markers.retain(|marker| tree.parent(marker).is_some());
                markers.is_empty()
            }
            State::Ready | State::Removed => false,
        };
        if drained {
            self.state = State::Removed;
        }

        true
    }

    /// Matcher for removal; with separate word search any token qualifies
    fn removal_regex(&self) -> Result<Regex, String> {
        let tokens: Vec<&str> = if self.options.separate_word_search {
            self.keyword.split(' ').filter(|t| !t.is_empty()).collect()
        } else {
            vec![self.keyword.as_str()]
        };

        let pattern = match tokens.as_slice() {
            [] => String::new(),
            [single] => build_pattern(single, &self.options),
            many => many
                .iter()
                .map(|token| format!("(?:{})", build_pattern(token, &self.options)))
                .collect::<Vec<_>>()
                .join("|"),
        };

        compile_pattern(&pattern).map_err(|e| e.to_string())
    }

    fn options_valid(&self) -> bool {
        match self.options.validate() {
            Ok(()) => true,
            Err(e) => {
                self.debug(&e.to_string());
                false
            }
        }
    }

    fn debug(&self, message: &str) {
        if self.options.debug {
            self.sink.debug(message);
        }
    }
}

/// Whether `node` or one of its ancestors is already a context root
fn is_covered<T: Tree>(tree: &T, node: &T::Node, roots: &[T::Node]) -> bool {
    if roots.is_empty() {
        return false;
    }
    let mut current = Some(node.clone());
    while let Some(candidate) = current {
        if roots.contains(&candidate) {
            return true;
        }
        current = tree.parent(&candidate);
    }
    false
}
