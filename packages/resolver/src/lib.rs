//! # Pagecraft Resolver
//!
//! Decides whether a node type named in an editor document is renderable.
//!
//! Two sources of membership are consulted:
//!
//! 1. The dynamic table of components registered by the embedding application
//!    (`Container`, `Text`, ...).
//! 2. The closed allow-list of primitive element tags (`div`, `svg`, ...), which
//!    never need registering.
//!
//! ```rust
//! use pagecraft_resolver::Resolver;
//! use serde_json::json;
//!
//! let resolver = Resolver::with_components(["Container", "Text"]);
//!
//! assert!(resolver.is_resolvable("Container"));
//! assert!(resolver.is_resolvable("div"));
//! assert!(!resolver.is_resolvable("marquee"));
//!
//! assert_eq!(resolver.resolve(&json!({ "resolvedName": "Text" })), Some("Text"));
//! ```

mod dom;
mod error;
mod node_type;
mod resolver;

pub use dom::{is_dom_element, DOM_ELEMENTS};
pub use error::ResolverError;
pub use node_type::{normalize_type_name, NodeType};
pub use resolver::{Registration, Resolver};
