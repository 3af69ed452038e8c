pub mod scaffold;
pub mod types;
pub mod validate;

pub use scaffold::{scaffold, ScaffoldArgs};
pub use types::{types, TypesArgs};
pub use validate::{validate, ValidateArgs};
