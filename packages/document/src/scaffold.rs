//! Default content and the load-or-fallback path used by page rendering.

use crate::document::Document;
use crate::error::DocumentError;
use crate::node::{Node, ROOT_ID};
use crate::validator::validate;
use crate::verdict::{Verdict, Violation};
use pagecraft_resolver::{NodeType, Resolver};
use serde_json::{json, Value};
use tracing::warn;

const WELCOME_ID: &str = "welcome";

impl Document {
    /// A padded canvas `Container` holding a single "Welcome" `Text`
    pub fn scaffold() -> Self {
        let root = Node::new(NodeType::indirect("Container"))
            .with_child(WELCOME_ID)
            .with_prop("isCanvas", json!(true))
            .with_prop("displayName", json!("Container"))
            .with_prop("props", json!({ "padding": "40px" }))
            .with_prop("parent", Value::Null);

        let welcome = Node::new(NodeType::indirect("Text"))
            .with_prop("isCanvas", json!(false))
            .with_prop("displayName", json!("Text"))
            .with_prop("props", json!({ "text": "Welcome", "fontSize": "24px" }))
            .with_prop("parent", json!(ROOT_ID));

        Document::new()
            .with_node(ROOT_ID, root)
            .with_node(WELCOME_ID, welcome)
    }
}

/// Why stored content was replaced by the scaffold
#[derive(Debug)]
pub enum Fallback {
    Invalid(Violation),
    Undecodable(DocumentError),
}

/// Result of [`load_or_scaffold`]
#[derive(Debug)]
pub struct Loaded {
    pub document: Document,

    /// Set when the stored content was not used
    pub fallback: Option<Fallback>,
}

impl Loaded {
    pub fn is_scaffold(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Decode stored content, falling back to [`Document::scaffold`] when it is
/// not a valid document.
pub fn load_or_scaffold(content: &Value, resolver: &Resolver) -> Loaded {
    let fallback = match validate(content, resolver) {
        Verdict::Valid => match Document::from_value(content) {
            Ok(document) => {
                return Loaded {
                    document,
                    fallback: None,
                }
            }
            Err(err) => Fallback::Undecodable(err),
        },
        Verdict::Invalid(violation) => Fallback::Invalid(violation),
    };

    warn!(reason = ?fallback, "Stored content rejected, using scaffold document");

    Loaded {
        document: Document::scaffold(),
        fallback: Some(fallback),
    }
}
