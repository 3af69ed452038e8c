//! Structural validation of editor documents.
//!
//! A single pass over the nodes checks each node's type and its direct
//! child references. Nodes are visited in key order so the violation that is
//! reported is the same on every run.

use crate::document::Document;
use crate::node::ROOT_ID;
use crate::verdict::{Verdict, Violation};
use pagecraft_resolver::{normalize_type_name, Resolver};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Validate raw content as read from storage or received from the editor.
///
/// Never panics: any JSON value is accepted and malformed content yields
/// [`Verdict::Invalid`].
#[instrument(level = "debug", skip_all)]
pub fn validate(content: &Value, resolver: &Resolver) -> Verdict {
    let verdict = Verdict::from(check_content(content, resolver));
    debug!(valid = verdict.is_valid(), violation = ?verdict.violation(), "Document validated");
    verdict
}

/// Boolean form of [`validate`]
pub fn is_valid(content: &Value, resolver: &Resolver) -> bool {
    validate(content, resolver).is_valid()
}

/// Validate an already decoded document.
///
/// Agrees with [`validate`] on the document's canonical encoding.
pub fn validate_document(document: &Document, resolver: &Resolver) -> Verdict {
    Verdict::from(check_document(document, resolver))
}

fn check_content(content: &Value, resolver: &Resolver) -> Result<(), Violation> {
    let nodes = match content.as_object() {
        Some(nodes) if !nodes.is_empty() => nodes,
        _ => return Err(Violation::EmptyOrNotAnObject),
    };

    if !nodes.contains_key(ROOT_ID) {
        return Err(Violation::MissingRoot);
    }

    // Sorted explicitly so the reported violation does not depend on map order
    let mut ids: Vec<&String> = nodes.keys().collect();
    ids.sort();

    for id in ids {
        let node = &nodes[id.as_str()];
        check_type(id, node.get("type"), resolver)?;
        check_children(id, node, nodes)?;
    }

    Ok(())
}

fn check_type(id: &str, raw_type: Option<&Value>, resolver: &Resolver) -> Result<(), Violation> {
    match raw_type.and_then(normalize_type_name) {
        Some(name) if resolver.is_resolvable(name) => Ok(()),
        type_name => Err(Violation::UnresolvableType {
            node_id: id.to_string(),
            type_name: type_name.map(str::to_string),
        }),
    }
}

fn check_children(id: &str, node: &Value, nodes: &Map<String, Value>) -> Result<(), Violation> {
    let positional = node.get("nodes").and_then(Value::as_array).into_iter().flatten();
    let mut linked: Vec<(&String, &Value)> = node
        .get("linkedNodes")
        .and_then(Value::as_object)
        .map(|slots| slots.iter().collect())
        .unwrap_or_default();
    linked.sort_by_key(|(slot, _)| *slot);

    for child in positional.chain(linked.into_iter().map(|(_, child)| child)) {
        match child {
            Value::String(child_id) if nodes.contains_key(child_id) => {}
            Value::String(child_id) => return Err(dangling(id, child_id.clone())),
            other => return Err(dangling(id, other.to_string())),
        }
    }

    Ok(())
}

fn check_document(document: &Document, resolver: &Resolver) -> Result<(), Violation> {
    if document.is_empty() {
        return Err(Violation::EmptyOrNotAnObject);
    }

    if !document.contains(ROOT_ID) {
        return Err(Violation::MissingRoot);
    }

    for (id, node) in document.iter() {
        match node.type_name() {
            Some(name) if resolver.is_resolvable(name) => {}
            type_name => {
                return Err(Violation::UnresolvableType {
                    node_id: id.clone(),
                    type_name: type_name.map(str::to_string),
                })
            }
        }

        if let Some(missing) = node.children().find(|child| !document.contains(child)) {
            return Err(dangling(id, missing.clone()));
        }
    }

    Ok(())
}

fn dangling(id: &str, child_id: String) -> Violation {
    Violation::DanglingReference {
        node_id: id.to_string(),
        child_id,
    }
}
