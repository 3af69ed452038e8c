use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Resolver table must be a JSON object, found {found}")]
    NotATable { found: &'static str },
}
