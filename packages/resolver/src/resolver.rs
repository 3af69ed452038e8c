use crate::dom::is_dom_element;
use crate::error::ResolverError;
use crate::node_type::normalize_type_name;
use serde_json::Value;
use std::collections::BTreeMap;

/// What a name is bound to in the dynamic table
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    /// A renderable component function
    Component,

    /// A renderable component given as an object or array definition
    Definition(Value),

    /// Any other value placed under a type key; never renderable
    Scalar(Value),
}

impl Registration {
    /// Only functions and non-null objects (arrays included) can render
    pub fn is_renderable(&self) -> bool {
        matches!(self, Registration::Component | Registration::Definition(_))
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Registration::Definition(value.clone()),
            other => Registration::Scalar(other.clone()),
        }
    }
}

/// Read-only membership authority for node type names.
///
/// Built once by the embedding application and shared between validation
/// passes. The primitive tag allow-list is always consulted after the
/// dynamic table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolver {
    table: BTreeMap<String, Registration>,
}

impl Resolver {
    /// Create a resolver with an empty dynamic table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with the given component names registered
    pub fn with_components<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut resolver = Self::new();
        for name in names {
            resolver.register(name);
        }
        resolver
    }

    /// Build from a JSON table such as `{ "Container": {...}, "Text": {...} }`
    pub fn from_table(table: &Value) -> Result<Self, ResolverError> {
        let entries = table.as_object().ok_or(ResolverError::NotATable {
            found: value_kind(table),
        })?;

        Ok(Self {
            table: entries
                .iter()
                .map(|(name, value)| (name.clone(), Registration::from_value(value)))
                .collect(),
        })
    }

    /// Register a component under `name`
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        self.insert(name, Registration::Component)
    }

    /// Bind `name` to an arbitrary registration, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, registration: Registration) -> &mut Self {
        self.table.insert(name.into(), registration);
        self
    }

    /// Lookup in the dynamic table only
    pub fn registration(&self, name: &str) -> Option<&Registration> {
        self.table.get(name)
    }

    /// Renderable names registered in the dynamic table
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.table
            .iter()
            .filter(|(_, registration)| registration.is_renderable())
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether a normalized type name can be rendered
    pub fn is_resolvable(&self, name: &str) -> bool {
        match self.table.get(name) {
            Some(registration) if registration.is_renderable() => true,
            _ => is_dom_element(name),
        }
    }

    /// Normalize a raw `type` field and return the name if it resolves
    pub fn resolve<'a>(&self, raw_type: &'a Value) -> Option<&'a str> {
        normalize_type_name(raw_type).filter(|name| self.is_resolvable(name))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
