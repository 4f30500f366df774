use thiserror::Error;

/// Errors surfaced by schema generation.
///
/// Anything below field granularity is recovered inside the transpiler;
/// these are the failures that reach the caller.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Datamodel(#[from] datamodel::DatamodelError),

    /// The assembled text failed the round trip through the GraphQL
    /// grammar. No partial output is returned.
    #[error("generated schema does not parse as GraphQL: {0}")]
    InvalidSchema(String),
}
