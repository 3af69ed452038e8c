//! Error types for decoding documents

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document must be a JSON object")]
    NotAnObject,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
