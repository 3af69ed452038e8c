//! Typed node records.
//!
//! Rendering properties (`props`, `isCanvas`, `parent`, ...) are opaque here
//! and preserved as-is through `props`.

use pagecraft_resolver::NodeType;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type NodeId = String;

/// Id of the document's entry node
pub const ROOT_ID: &str = "ROOT";

/// A single node record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Positional children
    #[serde(default, deserialize_with = "child_list")]
    pub nodes: Vec<NodeId>,

    /// Named children, keyed by slot
    #[serde(rename = "linkedNodes", default, deserialize_with = "slot_map")]
    pub linked_nodes: BTreeMap<String, NodeId>,

    #[serde(flatten)]
    pub props: Map<String, Value>,
}

impl Node {
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            nodes: Vec::new(),
            linked_nodes: BTreeMap::new(),
            props: Map::new(),
        }
    }

    pub fn with_child(mut self, id: impl Into<NodeId>) -> Self {
        self.nodes.push(id.into());
        self
    }

    pub fn with_slot(mut self, slot: impl Into<String>, id: impl Into<NodeId>) -> Self {
        self.linked_nodes.insert(slot.into(), id.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.props.insert(key.into(), value);
        self
    }

    pub fn type_name(&self) -> Option<&str> {
        self.node_type.name()
    }

    /// Positional children followed by linked children in slot order
    pub fn children(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().chain(self.linked_nodes.values())
    }
}

// A non-array `nodes` carries no children
fn child_list<'de, D>(deserializer: D) -> Result<Vec<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(child_id::<D::Error>).collect(),
        _ => Ok(Vec::new()),
    }
}

// A non-object `linkedNodes` carries no children
fn slot_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(slots) => slots
            .into_iter()
            .map(|(slot, id)| -> Result<(String, NodeId), D::Error> {
                Ok((slot, child_id(id)?))
            })
            .collect(),
        _ => Ok(BTreeMap::new()),
    }
}

fn child_id<E: de::Error>(value: Value) -> Result<NodeId, E> {
    match value {
        Value::String(id) => Ok(id),
        other => Err(E::custom(format!("child id must be a string, found {}", other))),
    }
}
