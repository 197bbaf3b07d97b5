//! Wrapping matches in marker elements
//!
//! Matching text nodes are split at match boundaries and each match is moved
//! into a fresh marker element. Only character data is ever searched, so a
//! keyword can never match inside a tag or an attribute.

use crate::options::Options;
use crate::scanner::collect_text_nodes;
use crate::tree::{NodeKind, Tree};
use regex::Regex;

/// Attribute identifying engine-inserted markers
pub const MARKER_ATTRIBUTE: &str = "data-hilite";

/// Whether a node carries the marker attribute
pub fn is_marked<T: Tree>(tree: &T, node: &T::Node) -> bool {
    tree.attribute(node, MARKER_ATTRIBUTE).is_some()
}

/// Whether a node is a marker for the configured tag and class
pub fn is_marker<T: Tree>(tree: &T, node: &T::Node, options: &Options) -> bool {
    tree.kind(node) == NodeKind::Element
        && tree
            .tag_name(node)
            .is_some_and(|tag| tag.eq_ignore_ascii_case(&options.element))
        && tree.has_class(node, &options.class_name)
        && is_marked(tree, node)
}

/// Create a detached marker holding `text`
pub fn create_marker<T: Tree>(tree: &mut T, text: &str, options: &Options) -> T::Node {
    let marker = tree.create_element(
        &options.element,
        &[
            ("class", options.class_name.as_str()),
            (MARKER_ATTRIBUTE, "true"),
        ],
    );
    let content = tree.create_text(text);
    tree.append_child(&marker, &content);
    marker
}

/// Wrap every match inside one text node
///
/// Text before each match stays as plain text; the original node keeps the
/// text after the last match, or is removed when nothing follows it. Returns
/// the inserted markers in document order.
pub fn mark_text_node<T: Tree>(
    tree: &mut T,
    node: &T::Node,
    regex: &Regex,
    options: &Options,
) -> Vec<T::Node> {
    let text = tree.text(node);
    let mut markers = Vec::new();
    let mut cursor = 0;

    for found in regex.find_iter(&text) {
        if found.is_empty() {
            continue;
        }
        if found.start() > cursor {
            let before = tree.create_text(&text[cursor..found.start()]);
            tree.insert_before(node, &before);
        }
        let marker = create_marker(tree, found.as_str(), options);
        tree.insert_before(node, &marker);
        markers.push(marker);
        cursor = found.end();
    }

    if markers.is_empty() {
        return markers;
    }
    if cursor < text.len() {
        tree.set_text(node, &text[cursor..]);
    } else {
        tree.remove_node(node);
    }

    markers
}

/// Outcome of one marking pass
#[derive(Debug)]
pub struct MarkReport<N> {
    /// Markers inserted by the pass
    pub markers: Vec<N>,
    /// Text nodes that contained at least one match
    pub matched_nodes: usize,
}

/// Mark every match in the direct text children of `elements`
pub fn mark_elements<T: Tree>(
    tree: &mut T,
    elements: &[T::Node],
    regex: &Regex,
    options: &Options,
) -> MarkReport<T::Node> {
    // Collected up front; marking inserts siblings into the scanned containers.
    let nodes: Vec<T::Node> = collect_text_nodes(&*tree, elements).collect();

    let mut report = MarkReport {
        markers: Vec::new(),
        matched_nodes: 0,
    };
    for node in nodes {
        let text = tree.text(&node);
        if text.trim().is_empty() || !regex.is_match(&text) {
            continue;
        }
        if tree.parent(&node).is_none() {
            continue;
        }

        let markers = mark_text_node(tree, &node, regex, options);
        if !markers.is_empty() {
            report.matched_nodes += 1;
            report.markers.extend(markers);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::keyword_regex;
    use crate::testing::MemTree;

    fn options() -> Options {
        Options::default()
    }

    #[test]
    fn test_wraps_every_match_preserving_case() {
        let mut tree = MemTree::new();
        let root = tree.root("p");
        let text = tree.text_child(root, "Lorem ipsum lorem");
        let regex = keyword_regex("lorem", &options()).unwrap();

        let markers = mark_text_node(&mut tree, &text, &regex, &options());

        assert_eq!(markers.len(), 2);
        assert_eq!(
            tree.render(root),
            "<p><span class=\"highlight\" data-hilite=\"true\">Lorem</span> ipsum \
             <span class=\"highlight\" data-hilite=\"true\">lorem</span></p>"
        );
    }

    #[test]
    fn test_original_node_keeps_trailing_text() {
        let mut tree = MemTree::new();
        let root = tree.root("p");
        let text = tree.text_child(root, "a fox runs");
        let regex = keyword_regex("fox", &options()).unwrap();

        mark_text_node(&mut tree, &text, &regex, &options());

        assert_eq!(tree.parent(&text), Some(root));
        assert_eq!(tree.text(&text), " runs");
        assert_eq!(tree.child_count(root), 3);
    }

    #[test]
    fn test_no_match_leaves_node_alone() {
        let mut tree = MemTree::new();
        let root = tree.root("p");
        let text = tree.text_child(root, "nothing here");
        let regex = keyword_regex("fox", &options()).unwrap();

        assert!(mark_text_node(&mut tree, &text, &regex, &options()).is_empty());
        assert_eq!(tree.render(root), "<p>nothing here</p>");
    }

    #[test]
    fn test_custom_signature() {
        let options = Options::builder()
            .element("mark")
            .class_name("hit")
            .build()
            .unwrap();
        let mut tree = MemTree::new();
        let root = tree.root("div");
        tree.text_child(root, "fox");
        let regex = keyword_regex("fox", &options).unwrap();

        let report = mark_elements(&mut tree, &[root], &regex, &options);

        assert_eq!(report.markers.len(), 1);
        assert!(is_marker(&tree, &report.markers[0], &options));
        assert!(!is_marker(&tree, &report.markers[0], &Options::default()));
        assert_eq!(
            tree.render(root),
            "<div><mark class=\"hit\" data-hilite=\"true\">fox</mark></div>"
        );
    }

    #[test]
    fn test_attributes_never_match() {
        let mut tree = MemTree::new();
        let root = tree.root("div");
        let link = tree.element(root, "a", &[("data-foo", "bar")]);
        tree.text_child(link, "data sheet");
        let regex = keyword_regex("data", &options()).unwrap();

        let report = mark_elements(&mut tree, &[root, link], &regex, &options());

        assert_eq!(report.markers.len(), 1);
        assert_eq!(tree.attribute(&link, "data-foo").as_deref(), Some("bar"));
        assert_eq!(
            tree.render(root),
            "<div><a data-foo=\"bar\"><span class=\"highlight\" data-hilite=\"true\">data</span> sheet</a></div>"
        );
    }

    #[test]
    fn test_whitespace_only_nodes_skipped() {
        let mut tree = MemTree::new();
        let root = tree.root("div");
        tree.text_child(root, "   ");
        let regex = keyword_regex(" ", &options()).unwrap();

        let report = mark_elements(&mut tree, &[root], &regex, &options());
        assert!(report.markers.is_empty());
        assert_eq!(report.matched_nodes, 0);
    }

    #[test]
    fn test_sibling_identity_preserved() {
        let mut tree = MemTree::new();
        let root = tree.root("div");
        let before = tree.text_child(root, "alpha ");
        let em = tree.element(root, "em", &[]);
        let target = tree.text_child(root, " beta gamma");
        let regex = keyword_regex("gamma", &options()).unwrap();

        let report = mark_elements(&mut tree, &[root], &regex, &options());

        assert_eq!(report.matched_nodes, 1);
        let children = tree.children(&root);
        assert_eq!(children[0], before);
        assert_eq!(children[1], em);
        assert_ne!(children[2], target);
        assert_eq!(tree.text(&children[2]), " beta ");
        assert!(tree.parent(&target).is_none());
    }
}
