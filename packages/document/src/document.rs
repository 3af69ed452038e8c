//! # Document
//!
//! Typed view of an editor document: a map from node id to node record.
//!
//! Stored content should be checked with [`crate::validate`] before it is
//! decoded. Every document that validates decodes into a [`Document`], and
//! the canonical re-encoding of a valid document validates again.

use crate::error::DocumentError;
use crate::node::{Node, NodeId, ROOT_ID};
use crate::validator::validate_document;
use crate::verdict::Verdict;
use pagecraft_resolver::Resolver;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    nodes: BTreeMap<NodeId, Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode from a JSON value
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        if !value.is_object() {
            return Err(DocumentError::NotAnObject);
        }
        Ok(Self::deserialize(value)?)
    }

    /// Decode from JSON text
    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Canonical JSON encoding
    pub fn to_value(&self) -> Result<Value, DocumentError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Insert a node, returning the node previously stored under `id`
    pub fn insert(&mut self, id: impl Into<NodeId>, node: Node) -> Option<Node> {
        self.nodes.insert(id.into(), node)
    }

    pub fn with_node(mut self, id: impl Into<NodeId>, node: Node) -> Self {
        self.insert(id, node);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn root(&self) -> Option<&Node> {
        self.get(ROOT_ID)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in id order
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Node)> {
        self.nodes.iter()
    }

    pub fn validate(&self, resolver: &Resolver) -> Verdict {
        validate_document(self, resolver)
    }
}
