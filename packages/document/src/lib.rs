//! # Pagecraft Document
//!
//! Node model and validator for visual-editor documents.
//!
//! ## Document shape
//!
//! ```text
//! {
//!   "ROOT":  { "type": { "resolvedName": "Container" }, "nodes": ["title"], "linkedNodes": { "header": "hdr" } },
//!   "title": { "type": "Text", "props": { "text": "Hello" } },
//!   "hdr":   { "type": "header" }
//! }
//! ```
//!
//! A document is a flat map from node id to node record. Children are
//! referenced by id, positionally through `nodes` or by slot name through
//! `linkedNodes`.
//!
//! ## Validation
//!
//! A document is valid when it is a non-empty object, has a `ROOT` node,
//! every node type resolves and every referenced child id exists. Only local
//! adjacency is checked: orphans and cycles are accepted. Use
//! [`orphans`] to report unreachable nodes separately.
//!
//! ```rust
//! use pagecraft_document::{validate, Resolver, Violation};
//! use serde_json::json;
//!
//! let resolver = Resolver::with_components(["Container", "Text"]);
//!
//! let content = json!({
//!     "ROOT": { "type": "Container", "nodes": ["n1"] },
//!     "n1": { "type": "Text" },
//! });
//! assert!(validate(&content, &resolver).is_valid());
//!
//! let content = json!({ "ROOT": { "type": "Container", "nodes": ["missing"] } });
//! assert!(matches!(
//!     validate(&content, &resolver).violation(),
//!     Some(Violation::DanglingReference { .. })
//! ));
//! ```

mod document;
mod error;
mod node;
mod reachability;
mod scaffold;
mod validator;
mod verdict;

pub use document::Document;
pub use error::DocumentError;
pub use node::{Node, NodeId, ROOT_ID};
pub use reachability::{node_types, orphans, reachable_from_root};
pub use scaffold::{load_or_scaffold, Fallback, Loaded};
pub use validator::{is_valid, validate, validate_document};
pub use verdict::{Verdict, Violation};

// Re-export resolver types for convenience
pub use pagecraft_resolver::{NodeType, Registration, Resolver};
