//! The `type` field of a node record.
//!
//! The editor serializes a node's type either as a bare name or as a
//! reference object carrying `resolvedName`, depending on how the component
//! was registered. Both forms normalize to a single name.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire form of a node's type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeType {
    /// `"type": "Container"`
    Direct(String),

    /// `"type": { "resolvedName": "Container" }`
    Indirect {
        #[serde(rename = "resolvedName")]
        resolved_name: String,
    },
}

impl NodeType {
    pub fn direct(name: impl Into<String>) -> Self {
        NodeType::Direct(name.into())
    }

    pub fn indirect(name: impl Into<String>) -> Self {
        NodeType::Indirect {
            resolved_name: name.into(),
        }
    }

    /// Normalized type name; `None` when the name is empty
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            NodeType::Direct(name) => name,
            NodeType::Indirect { resolved_name } => resolved_name,
        };
        (!name.is_empty()).then_some(name.as_str())
    }

    /// Decode the raw `type` field, rejecting anything that does not normalize
    pub fn from_value(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(_) => normalize_type_name(raw).map(NodeType::direct),
            Value::Object(_) => normalize_type_name(raw).map(NodeType::indirect),
            _ => None,
        }
    }
}

/// Normalize a raw `type` field to a type name.
///
/// Strings are returned unchanged. Objects yield their `resolvedName` string.
/// Missing, null, empty and any other shape yield `None`.
pub fn normalize_type_name(raw: &Value) -> Option<&str> {
    let name = match raw {
        Value::String(name) => name.as_str(),
        Value::Object(reference) => reference.get("resolvedName")?.as_str()?,
        _ => return None,
    };

    (!name.is_empty()).then_some(name)
}
