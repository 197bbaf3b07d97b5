//! Text node collection
//!
//! Containers are scanned one level deep. The element set already holds every
//! descendant element, so one level per container covers the whole subtree.

use crate::tree::Tree;
use std::slice;
use std::vec;

/// Lazy sequence of the direct text children of a set of containers
///
/// Nodes are read from the tree as the iterator advances; nothing is cached
/// between calls to [`collect_text_nodes`].
pub struct TextNodes<'a, T: Tree> {
    tree: &'a T,
    elements: slice::Iter<'a, T::Node>,
    pending: vec::IntoIter<T::Node>,
}

impl<T: Tree> Iterator for TextNodes<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.pending.next() {
                return Some(node);
            }
            let element = self.elements.next()?;
            self.pending = self.tree.child_text_nodes(element).into_iter();
        }
    }
}

/// Yield the character-data children of every element, in element order
pub fn collect_text_nodes<'a, T: Tree>(tree: &'a T, elements: &'a [T::Node]) -> TextNodes<'a, T> {
    TextNodes {
        tree,
        elements: elements.iter(),
        pending: Vec::new().into_iter(),
    }
}
