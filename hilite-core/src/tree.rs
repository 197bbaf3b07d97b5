//! Document tree interface
//!
//! The engine never owns a document. It drives one through this trait, which
//! adapters implement for a concrete DOM (see the `hilite-html` crate).
//! Node handles are cheap clones compared by identity.

/// Coarse classification of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element that may own children
    Element,
    /// Character data
    Text,
    /// Comments, doctypes, processing instructions and the like
    Other,
}

/// Structural access to a mutable document tree
pub trait Tree {
    /// Handle to a node of this tree
    type Node: Clone + PartialEq;

    /// Classify a node
    fn kind(&self, node: &Self::Node) -> NodeKind;

    /// The root element followed by every descendant element, in tree order
    fn subtree(&self, root: &Self::Node) -> Vec<Self::Node>;

    /// Drop every element matching any of the selectors
    fn filter_out(&self, elements: Vec<Self::Node>, selectors: &[String]) -> Vec<Self::Node>;

    /// Immediate children of a node, in order
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Immediate character-data children of an element
    fn child_text_nodes(&self, element: &Self::Node) -> Vec<Self::Node> {
        self.children(element)
            .into_iter()
            .filter(|child| self.kind(child) == NodeKind::Text)
            .collect()
    }

    /// Parent of a node, `None` for a root or a detached node
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Sibling immediately before a node
    fn previous_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Sibling immediately after a node
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Local tag name of an element
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    /// Attribute value of an element
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Character data of a text node, or the concatenated text of an element
    fn text(&self, node: &Self::Node) -> String;

    /// Overwrite the character data of a text node
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Create a detached text node
    fn create_text(&mut self, text: &str) -> Self::Node;

    /// Create a detached element carrying the given attributes
    fn create_element(&mut self, tag: &str, attributes: &[(&str, &str)]) -> Self::Node;

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Insert `node` immediately before `reference`
    fn insert_before(&mut self, reference: &Self::Node, node: &Self::Node);

    /// Detach a node (and its subtree) from the tree
    fn remove_node(&mut self, node: &Self::Node);

    /// Put `replacement` where `old` was and detach `old`
    fn replace_node(&mut self, old: &Self::Node, replacement: &Self::Node) {
        self.insert_before(old, replacement);
        self.remove_node(old);
    }

    /// Whether an element carries `class` in its class list
    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}
