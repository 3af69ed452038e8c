use serde::Serialize;
use thiserror::Error;

/// Why a document was rejected.
///
/// These are expected outcomes for stored or user-supplied content, not
/// failures of the validator itself.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason")]
pub enum Violation {
    #[error("Document is empty or not an object")]
    EmptyOrNotAnObject,

    #[error("Document has no ROOT node")]
    MissingRoot,

    #[error("Node '{node_id}' has {}", describe_type(.type_name))]
    UnresolvableType {
        node_id: String,
        type_name: Option<String>,
    },

    #[error("Node '{node_id}' references missing child '{child_id}'")]
    DanglingReference { node_id: String, child_id: String },
}

fn describe_type(type_name: &Option<String>) -> String {
    match type_name {
        Some(name) => format!("unknown type '{}'", name),
        None => "no usable type".to_string(),
    }
}

impl Violation {
    /// The node the violation was found on, if it is node-specific
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Violation::UnresolvableType { node_id, .. }
            | Violation::DanglingReference { node_id, .. } => Some(node_id),
            Violation::EmptyOrNotAnObject | Violation::MissingRoot => None,
        }
    }
}

/// Outcome of validating a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "violation")]
pub enum Verdict {
    Valid,
    Invalid(Violation),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The first violation found, if any
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(violation) => Some(violation),
        }
    }

    pub fn into_result(self) -> Result<(), Violation> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(violation) => Err(violation),
        }
    }
}

impl From<Result<(), Violation>> for Verdict {
    fn from(result: Result<(), Violation>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(violation) => Verdict::Invalid(violation),
        }
    }
}
