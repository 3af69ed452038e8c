//! Reachability analysis from `ROOT`.
//!
//! Validity does not depend on any of this: orphaned nodes and cycles are
//! accepted by the validator. These walks tolerate both, and skip child ids
//! that do not exist.

use crate::document::Document;
use crate::node::{NodeId, ROOT_ID};
use std::collections::HashSet;

/// Ids reachable from `ROOT`, in depth-first pre-order.
///
/// Empty when the document has no `ROOT`.
pub fn reachable_from_root(document: &Document) -> Vec<NodeId> {
    let mut order = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = Vec::new();

    if document.contains(ROOT_ID) {
        stack.push(ROOT_ID);
    }

    while let Some(id) = stack.pop() {
        let Some(node) = document.get(id) else {
            continue;
        };
        if !seen.insert(id) {
            continue;
        }
        order.push(id.to_string());

        // Reversed so the first child is visited first
        let children: Vec<&NodeId> = node.children().collect();
        for child in children.into_iter().rev() {
            if !seen.contains(child.as_str()) {
                stack.push(child.as_str());
            }
        }
    }

    order
}

/// Ids not reachable from `ROOT`, in id order
pub fn orphans(document: &Document) -> Vec<NodeId> {
    let reachable: HashSet<NodeId> = reachable_from_root(document).into_iter().collect();

    document
        .iter()
        .map(|(id, _)| id)
        .filter(|id| !reachable.contains(*id))
        .cloned()
        .collect()
}

/// Distinct type names reachable from `ROOT`, in the order first seen
pub fn node_types(document: &Document) -> Vec<String> {
    let mut seen = HashSet::new();

    reachable_from_root(document)
        .iter()
        .filter_map(|id| document.get(id))
        .filter_map(|node| node.type_name())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
