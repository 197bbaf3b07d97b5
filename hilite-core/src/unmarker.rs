//! Removing markers and coalescing the text they leave behind
//!
//! A removed marker's text is folded into the run of adjacent plain text and
//! removable markers around it, so the run ends up as exactly one text node.
//! Mark/unmark cycles therefore never leave the text split into fragments.

use crate::tree::{NodeKind, Tree};
use regex::Regex;

/// Remove every candidate whose text matches `regex`
///
/// Candidates that do not match are left in place. Returns how many markers
/// were removed.
pub fn unmark<T: Tree>(tree: &mut T, candidates: &[T::Node], regex: &Regex) -> usize {
    // Decided before any edit so folding neighbours cannot change the outcome.
    let stack: Vec<T::Node> = candidates
        .iter()
        .filter(|candidate| tree.parent(candidate).is_some())
        .filter(|candidate| regex.is_match(&tree.text(candidate)))
        .cloned()
        .collect();

    let mut removed = 0;
    for candidate in &stack {
        // Already folded into an earlier candidate's run.
        if tree.parent(candidate).is_none() {
            continue;
        }
        removed += coalesce(tree, candidate, &stack);
    }

    removed
}

fn joins_run<T: Tree>(tree: &T, node: &T::Node, stack: &[T::Node]) -> bool {
    match tree.kind(node) {
        NodeKind::Text => true,
        NodeKind::Element => stack.contains(node),
        NodeKind::Other => false,
    }
}

/// Replace `candidate` and its run of neighbours with one text node
///
/// The first plain text node of the run survives, so a previous neighbour
/// takes priority over a next one. Without any text neighbour the candidate
/// is replaced by a new text node. Returns the number of markers consumed.
fn coalesce<T: Tree>(tree: &mut T, candidate: &T::Node, stack: &[T::Node]) -> usize {
    let mut before = Vec::new();
    let mut cursor = tree.previous_sibling(candidate);
    while let Some(node) = cursor {
        if !joins_run(&*tree, &node, stack) {
            break;
        }
        cursor = tree.previous_sibling(&node);
        before.push(node);
    }
    before.reverse();

    let mut after = Vec::new();
    let mut cursor = tree.next_sibling(candidate);
    while let Some(node) = cursor {
        if !joins_run(&*tree, &node, stack) {
            break;
        }
        cursor = tree.next_sibling(&node);
        after.push(node);
    }

    let run: Vec<T::Node> = before
        .into_iter()
        .chain(std::iter::once(candidate.clone()))
        .chain(after)
        .collect();
    let merged: String = run.iter().map(|node| tree.text(node)).collect();
    let survivor = run
        .iter()
        .find(|node| tree.kind(node) == NodeKind::Text)
        .cloned();

    let consumed = run
        .iter()
        .filter(|node| tree.kind(node) == NodeKind::Element)
        .count();

    match survivor {
        Some(survivor) => {
            tree.set_text(&survivor, &merged);
            for node in run.iter().filter(|node| **node != survivor) {
                tree.remove_node(node);
            }
        }
        None => {
            let replacement = tree.create_text(&merged);
            tree.replace_node(candidate, &replacement);
            for node in run.iter().filter(|node| *node != candidate) {
                tree.remove_node(node);
            }
        }
    }

    consumed
}
