mod format_definition;
mod format_field;
mod format_scalar;

pub use format_definition::{DefinitionKind, format_definition};
pub use format_field::format_field;
pub use format_scalar::format_scalar;
